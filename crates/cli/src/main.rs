use clap::{Parser, Subcommand};
use sqlite_adapter::SqliteTimestampStore;
use std::error::Error;
use std::path::PathBuf;
use subscription_core::application::SubscriptionService;
use subscription_core::error::SubscriptionError;
use subscription_core::ports::{Clock, ReportSink, SystemClock, TimestampStore};
use subscription_core::schedule::AutoUpdateSchedule;
use subscription_core::utils::{format_file_size, format_zh_cn_timestamp};
use text_file_adapter::{FileReportWriter, StdoutReportWriter, TextFileSource};

/// CLI tool to clean up proxy subscription files and export them as an annotated report
#[derive(Parser, Debug)]
#[command(name = "sub-extract")]
#[command(about = "Filters subscription links, unwraps Base64 bundles and writes a timestamped report")]
struct Cli {
    /// SQLite file remembering when a file was last processed
    #[arg(long = "state-db", global = true, default_value = "subscription-state.db")]
    state_db: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process a .txt subscription file and export the report
    Process {
        /// Path to the source .txt file
        #[arg(short = 'i', long = "input-file", required = true)]
        input_file: PathBuf,

        /// Folder where the report file will be written
        #[arg(short = 'o', long = "output-dir", default_value = ".")]
        output_dir: String,

        /// Print the report to stdout instead of saving it
        #[arg(long = "stdout")]
        stdout: bool,

        /// Hour of the daily auto-update slot shown in the report header
        #[arg(long, default_value_t = 7)]
        hour: u32,

        /// Minute of the daily auto-update slot shown in the report header
        #[arg(long, default_value_t = 0)]
        minute: u32,
    },
    /// Show when a file was last processed
    LastRun,
    /// Show the daily auto-update slot and when it comes next
    Schedule {
        /// Hour of the daily auto-update slot (0-23)
        #[arg(long, default_value_t = 7)]
        hour: u32,

        /// Minute of the daily auto-update slot (0-59)
        #[arg(long, default_value_t = 0)]
        minute: u32,
    },
}

/// Status lines go to stderr whenever stdout carries the report itself
struct Status {
    to_stderr: bool,
}

impl Status {
    fn say(&self, message: &str) {
        if self.to_stderr {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }
}

fn schedule_from(hour: u32, minute: u32) -> Result<AutoUpdateSchedule, Box<dyn Error>> {
    AutoUpdateSchedule::new(hour, minute)
        .ok_or_else(|| format!("Invalid schedule time {}:{}", hour, minute).into())
}

fn process(
    state_db: String,
    input_file: PathBuf,
    output_dir: String,
    stdout: bool,
    schedule: AutoUpdateSchedule,
) -> Result<(), Box<dyn Error>> {
    let status = Status { to_stderr: stdout };

    // Instantiate concrete implementations of secondary adapters
    let sink: Box<dyn ReportSink> = if stdout {
        Box::new(StdoutReportWriter)
    } else {
        Box::new(FileReportWriter::new(output_dir))
    };

    let service = SubscriptionService::new(
        Box::new(TextFileSource),
        sink,
        Box::new(SqliteTimestampStore::new(state_db)),
        Box::new(SystemClock),
    )
    .with_schedule(schedule);

    if let Some(last) = service.last_processed()? {
        status.say(&format!("上次处理时间: {}", last));
    }

    let summary = service.run(&input_file)?;
    status.say(&format!(
        "文件: {} ({})",
        summary.source_name,
        format_file_size(summary.source_size)
    ));
    status.say("文件读取成功");
    status.say("文件处理成功");
    if stdout {
        status.say("内容已输出");
    } else {
        status.say(&format!("文件已保存: {}", summary.destination));
    }
    status.say(&format!("总链接数: {}", summary.link_count));
    status.say(&format!("处理时间: {}", summary.processed_at));
    Ok(())
}

fn last_run(state_db: String) -> Result<(), Box<dyn Error>> {
    match SqliteTimestampStore::new(state_db).load()? {
        Some(last) => println!("上次处理时间: {}", last),
        None => println!("尚无处理记录"),
    }
    Ok(())
}

fn schedule(hour: u32, minute: u32) -> Result<(), Box<dyn Error>> {
    let schedule = schedule_from(hour, minute)?;
    let now = SystemClock.now();

    println!("自动更新: {}", schedule.annotation());
    if schedule.is_due(&now) {
        println!("正在执行自动更新...");
    }
    println!("下次更新: {}", format_zh_cn_timestamp(&schedule.next_run(&now)));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.cmd {
        Command::Process {
            input_file,
            output_dir,
            stdout,
            hour,
            minute,
        } => schedule_from(hour, minute)
            .and_then(|schedule| process(cli.state_db, input_file, output_dir, stdout, schedule)),
        Command::LastRun => last_run(cli.state_db),
        Command::Schedule { hour, minute } => schedule(hour, minute),
    };

    if let Err(e) = result {
        match e.downcast_ref::<SubscriptionError>() {
            Some(err) => eprintln!("{}: {}", err.status_message(), err),
            None => eprintln!("处理失败: {}", e),
        }
        std::process::exit(1);
    }
}
