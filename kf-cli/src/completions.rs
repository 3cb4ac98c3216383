use std::io::{
    self,
    Write,
};

use clap_complete::{
    generate,
    Shell,
};
use kf_core::prelude::*;

pub const BIN_NAME: &str = "kubectl-finalize";

pub(super) fn write_completions(shell: Shell, cmd: &mut clap::Command, out: &mut impl Write) {
    generate(shell, cmd, BIN_NAME, out);
}

pub fn cmd(shell: Shell, mut cmd: clap::Command) -> EmptyResult {
    let mut out = io::stdout().lock();
    write_completions(shell, &mut cmd, &mut out);
    out.flush()?;
    Ok(())
}
