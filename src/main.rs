use gravbox::{bench_gravity, bench_step};
use gravbox::{run_sandbox, Sandbox, SandboxConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Configuration file name under scenarios/
    #[arg(short, default_value = "sandbox.yaml")]
    file_name: String,

    /// Run the timing sweeps instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_config_from_yaml(file_name: &str) -> Result<SandboxConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let cfg: SandboxConfig = serde_yaml::from_reader(reader)?;

    Ok(cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let cfg = load_config_from_yaml(&args.file_name)?;
    let sandbox = Sandbox::build(cfg);
    run_sandbox(sandbox);

    Ok(())
}
