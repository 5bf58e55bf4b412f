use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use tempfile::TempDir;

mod check;

pub struct CliTest {
    _temp_dir: TempDir,
    root_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            root_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &[u8]) -> Result<()> {
        let file_path = self.root_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Command against this test's content root, colors disabled for stable
    /// output.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_advlint"));
        cmd.arg(&self.root_dir);
        cmd.env("NO_COLOR", "1");
        cmd
    }
}

/// A content root exercising every finding category: block1 is clean, block2
/// lacks `potential`, block3 lacks its `_desc` localization key, the
/// localization source has no BOM, and one stray line carries a retired token.
pub fn write_mixed_fixture(test: &CliTest) -> Result<()> {
    test.write_file(
        "common/advances/military.txt",
        b"\
block1 = {
    potential = {
        always = yes
    }
}
block2 = {
    cost = 100
}
block3 = {
    potential = {
    }
}
",
    )?;
    test.write_file(
        "localization/english/advances_l_english.yml",
        b"\
l_english:
 block1:0 \"First\"
 block1_desc:0 \"First desc\"
 block2:0 \"Second\"
 block2_desc:0 \"Second desc\"
 block3:0 \"Third\"
",
    )?;
    test.write_file("common/events/old.txt", b"loyalty = 0.1\n")?;
    Ok(())
}

/// A fully clean content root: BOM present, every key covered, no retired
/// tokens, balanced braces.
pub fn write_clean_fixture(test: &CliTest) -> Result<()> {
    test.write_file(
        "common/advances/civic.txt",
        b"\
civic_code = {
    potential = {
        always = yes
    }
}
",
    )?;
    test.write_file(
        "localization/english/advances_l_english.yml",
        b"\xEF\xBB\xBFl_english:\n civic_code:0 \"Code\"\n civic_code_desc:0 \"Desc\"\n",
    )?;
    Ok(())
}
