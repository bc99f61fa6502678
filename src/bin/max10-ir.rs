//! Host-side helper for the MAX10 instruction table: list it, decode values or names, or
//! regenerate the table as source.

use std::io::{self, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use max10_ir::{Group, Instruction, IR_LEN};

#[derive(Parser, Debug)]
#[command(
    name = "max10-ir",
    version,
    about = "Look up JTAG instruction register opcodes of Intel MAX10 FPGAs"
)]
struct Cli {
    /// Log lookups (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every opcode
    List {
        /// Only print opcodes of this family
        #[arg(long, value_enum)]
        group: Option<Group>,
    },

    /// Decode names (ISC_ERASE) or values (0x2f2, 0b1011110010, 754)
    Lookup {
        #[arg(required = true)]
        queries: Vec<String>,
    },

    /// Print the table as source code
    Emit {
        #[arg(long, value_enum, default_value_t = Format::C)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    C,
    Rust,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_value(query: &str) -> anyhow::Result<u16> {
    let value = if let Some(hex) = query.strip_prefix("0x").or_else(|| query.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16)
    } else if let Some(bin) = query.strip_prefix("0b").or_else(|| query.strip_prefix("0B")) {
        u16::from_str_radix(bin, 2)
    } else {
        query.parse()
    };
    value.with_context(|| format!("`{}` is not a valid opcode value", query))
}

/// Resolve a name or a numeric literal to an instruction
fn resolve(query: &str) -> anyhow::Result<Instruction> {
    let query = query.trim();
    let numeric = query.starts_with(|c: char| c.is_ascii_digit());
    let insn = if numeric {
        Instruction::from_bits(parse_value(query)?)?
    } else {
        Instruction::from_name(query)?
    };
    debug!(query, name = insn.name(), bits = insn.bits(), "resolved");
    Ok(insn)
}

fn row(insn: Instruction) -> String {
    format!(
        "{:<18} {:#05x} {:>4} {:0width$b} {}",
        insn.name(),
        insn.bits(),
        insn.bits(),
        insn.bits(),
        insn.group(),
        width = IR_LEN
    )
}

fn emit(format: Format) -> String {
    let mut out = String::new();
    if format == Format::Rust {
        out.push_str(&format!("pub const IR_LEN: usize = {};\n\n", IR_LEN));
    }
    let mut last_group = None;
    for insn in Instruction::ALL {
        if last_group.is_some() && last_group != Some(insn.group()) {
            out.push('\n');
        }
        last_group = Some(insn.group());
        let line = match format {
            Format::C => format!("#define {:<19} {:#x}\n", insn.name(), insn.bits()),
            Format::Rust => format!("pub const {}: u16 = {:#x};\n", insn.name(), insn.bits()),
        };
        out.push_str(&line);
    }
    out
}

/// Print one row per query on `out` and one error line per failed query on `err`.  Fails if any
/// query did not resolve, so the process exits non-zero.
fn lookup(queries: &[String], out: &mut impl Write, err: &mut impl Write) -> anyhow::Result<()> {
    let mut failed = 0;
    for query in queries {
        match resolve(query) {
            Ok(insn) => writeln!(out, "{}", row(insn))?,
            Err(e) => {
                warn!(query = query.as_str(), "lookup failed");
                writeln!(err, "{}: {:#}", query, e)?;
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} lookups failed", failed, queries.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List { group } => {
            let insns: Vec<Instruction> = match group {
                Some(g) => g.instructions().collect(),
                None => Instruction::ALL.to_vec(),
            };
            for insn in insns {
                println!("{}", row(insn));
            }
        }
        Commands::Lookup { queries } => {
            lookup(&queries, &mut io::stdout().lock(), &mut io::stderr().lock())?
        }
        Commands::Emit { format } => print!("{}", emit(format)),
    }
    Ok(())
}
