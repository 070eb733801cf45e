use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use archtools_core::config::{load, VmConfig};
use archtools_core::error::CliError;
use archtools_core::vm::{Memory, Vm};

use super::cli::GlobalArgs;

#[derive(Parser, Debug, Clone)]
#[command(name = "vm", version, about = "Run a 20-byte memory image on the toy computer")]
pub struct Args {
    /// Raw memory image, exactly 20 bytes.
    pub image: PathBuf,

    /// Overwrite the first input word before running.
    #[arg(long)]
    pub input1: Option<u16>,

    /// Overwrite the second input word before running.
    #[arg(long)]
    pub input2: Option<u16>,

    /// Instruction budget. Overrides `vm.max_steps` from config.
    #[arg(long)]
    pub max_steps: Option<u64>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Loads only the `[vm]` settings, then runs.
pub fn execute<F>(
    args: &Args,
    config_path: &Path,
    lookup: F,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let cfg = load::load_vm_from(config_path, lookup)?;
    run(args, &cfg, out)
}

pub fn run(args: &Args, cfg: &VmConfig, out: &mut impl Write) -> Result<(), CliError> {
    let mut memory = Memory::load(&args.image)?;
    if let Some(v) = args.input1 {
        memory.set_input1(v);
    }
    if let Some(v) = args.input2 {
        memory.set_input2(v);
    }

    let mut vm = Vm::new(args.max_steps.unwrap_or(cfg.max_steps));
    let summary = vm.run(&mut memory)?;

    writeln!(out, "Input1: {}", memory.input1())?;
    writeln!(out, "Input2: {}", memory.input2())?;
    writeln!(out, "Output: {}", memory.output())?;
    writeln!(
        out,
        "Registers: pc={} r1={} r2={}",
        summary.registers[0], summary.registers[1], summary.registers[2]
    )?;
    writeln!(out, "Steps: {}", summary.steps)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use archtools_core::error::VmError;
    use archtools_core::vm::{Opcode, MEM_SIZE};
    use pretty_assertions::assert_eq;

    #[rustfmt::skip]
    fn add_image() -> [u8; MEM_SIZE] {
        [
            Opcode::LoadWord as u8, 0x01, 0x10,
            Opcode::LoadWord as u8, 0x02, 0x12,
            Opcode::Add as u8, 0x01, 0x02,
            Opcode::StoreWord as u8, 0x01, 0x0e,
            Opcode::Halt as u8, 0x00,
            0x00, 0x00,
            0xaa, 0x14,
            0x0c, 0x00,
        ]
    }

    fn write_image(dir: &tempfile::TempDir, image: &[u8]) -> String {
        let path = dir.path().join("image.bin");
        std::fs::write(&path, image).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn runs_image_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, &add_image());

        let args = Args::try_parse_from(["vm", path.as_str()]).unwrap();
        let mut out = Vec::new();
        run(&args, &VmConfig::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Input1: 5290\nInput2: 12\nOutput: 5302\nRegisters: pc=12 r1=5302 r2=12\nSteps: 5\n"
        );
    }

    #[test]
    fn inputs_can_be_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, &add_image());

        let args = Args::try_parse_from(["vm", path.as_str(), "--input1", "40", "--input2", "2"])
            .unwrap();
        let mut out = Vec::new();
        run(&args, &VmConfig::default(), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Output: 42\n"));
    }

    #[test]
    fn step_budget_from_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, &add_image());

        let args = Args::try_parse_from(["vm", path.as_str(), "--max-steps", "2"]).unwrap();
        let mut out = Vec::new();
        let err = run(&args, &VmConfig::default(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            CliError::Vm(VmError::StepLimitExceeded { limit: 2 })
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn binary_settings_do_not_affect_vm() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_image(&dir, &add_image());
        let config = dir.path().join(load::CONFIG_FILE);
        std::fs::write(&config, "[binary]\noverflow = \"sideways\"\n").unwrap();

        let args = Args::try_parse_from(["vm", path.as_str()]).unwrap();
        let mut out = Vec::new();
        let lookup = |key: &str| (key == load::ENV_OVERFLOW).then(|| "sideways".to_string());
        execute(&args, &config, lookup, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Output: 5302\n"));
    }
}
