use anyhow::{bail, Result};
use postats::{write_report_json, PostAnalyzer};
use std::path::PathBuf;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(dump) = args.next() else {
        bail!("usage: postats <posts.xml> [report.json]");
    };
    let report_out = args.next().map(PathBuf::from);

    let hw = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(8);

    let report = PostAnalyzer::new()
        .workers(hw)
        .progress(true)
        .progress_label("posts.xml")
        .analyze(&PathBuf::from(dump));

    if let Some(out) = report_out {
        write_report_json(&report, &out)?;
        println!("Report written to {}", out.display());
    }
    Ok(())
}
