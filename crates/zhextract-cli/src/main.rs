use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use zhextract_core::{
    extract, load_config, write_output, ExtractOptions, CONFIG_FILE_NAME, OUTPUT_FILE_NAME,
};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "zhextract", version, about = "提取项目中包含中文的字符串字面量")]
struct Cli {
    /// 配置文件路径（JSON 对象，键为 TargetPath / TargetFile）
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// 输出文件路径（每条一行，UTF-8）
    #[arg(long, default_value = OUTPUT_FILE_NAME)]
    output: PathBuf,

    /// 线程数（"auto"=CPU 核心数；1 走串行）
    #[arg(long, default_value = "auto")]
    threads: String,
}

fn main() {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    // 顶层统一收敛：任何致命错误在此打印并以非零码退出
    if let Err(err) = run(cli) {
        println!("There are some errors: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!(config = %cli.config.display(), "loading config");
    let config = load_config(&cli.config)?;
    info!(
        target_path = %config.target_path.display(),
        target_files = ?config.target_files,
        "starting extraction"
    );

    let opts = ExtractOptions { threads: parse_threads(&cli.threads) };
    let (entries, stats) = extract(&config, &opts)?;

    // 提取完成后才创建输出文件，中途终止不会留下半成品
    let mut out = BufWriter::new(File::create(&cli.output).context("create output file")?);
    write_output(&entries, &mut out)?;
    out.flush().context("flush output file")?;

    info!(
        files_scanned = stats.files_scanned,
        candidates_total = stats.candidates_total,
        unique_total = stats.unique_total,
        "extraction finished"
    );
    println!("提取完成，TotalCount: {}", entries.len());
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    // 日志走 stderr，stdout 只保留约定的结果行
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 解析线程参数
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") {
        return None;
    }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}
