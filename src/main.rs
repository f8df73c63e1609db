//! Pipeline simulator CLI.
//!
//! Runs a program listing through the five-stage pipeline and prints the
//! occupancy diagram to stdout. The subcommand selects the hazard policy:
//!
//! ```text
//! riscv-pipesim forward   <instruction_file> <cycle_count>
//! riscv-pipesim noforward <instruction_file> <cycle_count>
//! ```
//!
//! Exit code 0 on success; any error (usage, load, config, memory range) is
//! reported on stderr with a non-zero exit code, and on a memory error the
//! partial diagram is not rendered.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::process;

use riscv_pipesim::common::SimError;
use riscv_pipesim::config::Config;
use riscv_pipesim::core::{HazardPolicy, Processor};
use riscv_pipesim::sim::loader::Program;

#[derive(Parser, Debug)]
#[command(author, version, about = "RV32IM cycle-accurate 5-stage pipeline simulator")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Optional TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print run statistics to stderr after the diagram.
    #[arg(long, global = true)]
    stats: bool,

    /// Emit the diagram and statistics as JSON on stdout instead of the table.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Forwarding datapath: stalls only for load-use hazards.
    Forward(RunArgs),
    /// Non-forwarding datapath: stalls until producers write back.
    Noforward(RunArgs),
}

#[derive(ClapArgs, Debug)]
struct RunArgs {
    /// Program listing: hex machine word + assembly per line.
    instruction_file: String,

    /// Number of clock ticks to simulate.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    cycle_count: u64,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let (policy, args) = match &cli.command {
        Command::Forward(args) => (HazardPolicy::Forwarding, args),
        Command::Noforward(args) => (HazardPolicy::NonForwarding, args),
    };

    let config = Config::load(cli.config.as_deref())?;
    let program = Program::load(&args.instruction_file)?;

    let mut cpu = Processor::new(policy, &program, &config);
    if let Err(e) = cpu.run(args.cycle_count) {
        // Fatal mid-run error: dump register state, skip the diagram.
        cpu.regs.dump();
        return Err(e);
    }

    if cli.json {
        let report = serde_json::json!({
            "stats": cpu.stats,
            "diagram": cpu.diagram().snapshot(cpu.stats.cycles),
        });
        println!("{report:#}");
    } else {
        print!("{}", cpu.diagram().render(cpu.stats.cycles));
    }

    if cli.stats {
        cpu.stats.print();
    }

    Ok(())
}
