//! Entropy-backed commands: fresh seeds and GUIDs.

use twister_engine::oneshot;

use crate::Result;

/// Run the seed command
pub fn run_seed() -> Result<()> {
    println!("{}", oneshot::new_seed());
    Ok(())
}

/// Run the guid command
pub fn run_guid() -> Result<()> {
    println!("{}", oneshot::new_guid());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_commands_run() {
        assert!(run_seed().is_ok());
        assert!(run_guid().is_ok());
    }
}
