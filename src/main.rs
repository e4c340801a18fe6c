//! playerjson - PLAYER CSV TO JSON CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use playerjson::{cli::Args, converter::convert, stats::ConvertReport};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// 변환 실행 및 결과 출력
fn run(args: &Args) -> Result<()> {
    let report = convert(&args.csv, &args.out, &args.convert_options()).with_context(|| {
        format!(
            "변환 실패: {} → {}",
            args.csv.display(),
            args.out.display()
        )
    })?;

    print_report(&report, args.verbose);
    Ok(())
}

/// 경고, 결과 한 줄, (verbose일 때) 통계 출력
fn print_report(report: &ConvertReport, verbose: bool) {
    if let Some(warning) = report.missing_warning() {
        eprintln!("{}", warning.yellow());
    }

    println!("{}", report.result_line());

    if verbose {
        report.print_summary();
    }
}
