#![allow(dead_code)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

pub const BACKUP: &str = r#"[
  {
    "paper_url": "https://paperswithcode.com/paper/attention-is-all-you-need",
    "paper_title": "Attention Is All You Need",
    "paper_arxiv_id": "1706.03762",
    "paper_url_abs": "https://arxiv.org/abs/1706.03762v5",
    "paper_url_pdf": "https://arxiv.org/pdf/1706.03762v5.pdf",
    "repo_url": "https://github.com/tensorflow/tensor2tensor",
    "is_official": true,
    "mentioned_in_paper": false,
    "mentioned_in_github": true,
    "framework": "tensorflow"
  },
  {
    "paper_url": "https://paperswithcode.com/paper/bert-pre-training-of-deep-bidirectional",
    "paper_title": "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
    "paper_arxiv_id": "1810.04805",
    "paper_url_abs": "https://arxiv.org/abs/1810.04805v2",
    "paper_url_pdf": "https://arxiv.org/pdf/1810.04805v2.pdf",
    "repo_url": "https://github.com/google-research/bert",
    "is_official": true,
    "framework": "tensorflow"
  }
]"#;

/// A scratch directory holding the backup JSON.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tmp dir");
        fs::write(dir.path().join("backup.json"), BACKUP).expect("write backup");
        Workspace { dir }
    }

    pub fn backup(&self) -> PathBuf {
        self.path("backup.json")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read file")
    }
}

pub fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(strip_ansi_escapes::strip(&output.stderr)).expect("utf-8 stderr")
}
