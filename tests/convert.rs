use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::{Workspace, stderr_of};

const MARKDOWN: &str = "# Test Paper Collection

- **Attention Is All You Need**
  **Paper**: [Link](https://paperswithcode.com/paper/attention-is-all-you-need)

- **BERT Paper**
  **Paper**: [Link](https://cs.paperswithcode.com/paper/bert-pre-training-of-deep-bidirectional)

- **Missing**
  **Paper**: <https://paperswithcode.com/paper/some-unknown-paper>.

## References

1. [Attention paper](https://paperswithcode.com/paper/attention-is-all-you-need)
";

#[test]
fn convert_markdown_file() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let input = ws.write("papers.md", MARKDOWN);

    let mut cmd = Command::cargo_bin("pwc2arxiv")?;
    cmd.env("NO_COLOR", "1");
    let output = cmd
        .arg("convert")
        .arg(&input)
        .arg("--json-file")
        .arg(ws.backup())
        .output()?;
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let converted = ws.read("papers_arxiv.md");
    assert_eq!(converted.matches("https://arxiv.org/abs/1706.03762v5").count(), 2);
    assert!(converted.contains("(https://arxiv.org/abs/1810.04805v2)"));
    assert!(converted.contains("<https://paperswithcode.com/paper/some-unknown-paper>."));
    assert!(!converted.contains("attention-is-all-you-need"));

    let report = ws.read("papers_arxiv_not_found.txt");
    assert!(report.starts_with("URLs not found in backup data - manual lookup needed:"));
    assert!(report.contains("https://paperswithcode.com/paper/some-unknown-paper\n"));
    assert!(report.contains("Search term: Some Unknown Paper"));

    let stderr = stderr_of(&output);
    assert!(
        stderr.contains("✓ 2") && stderr.contains("✗ 1"),
        "stderr summary mismatch. stderr=\n{}",
        stderr
    );
    assert!(stderr.contains("Total URLs found: 3"), "stderr=\n{}", stderr);
    Ok(())
}

#[test]
fn convert_to_explicit_output() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let input = ws.write(
        "page.html",
        r#"<p><a href="https://paperswithcode.com/paper/attention-is-all-you-need">Attention</a></p>"#,
    );
    let out = ws.path("out.html");

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .args(["convert", "-j"])
        .arg(ws.backup())
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("✓ 1").and(predicate::str::contains("✗ 0")));

    assert_eq!(
        ws.read("out.html"),
        r#"<p><a href="https://arxiv.org/abs/1706.03762v5">Attention</a></p>"#
    );
    assert!(!ws.path("out_not_found.txt").exists());
    Ok(())
}

#[test]
fn dry_run_leaves_disk_alone() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let input = ws.write("notes.txt", MARKDOWN);

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(&input)
        .arg("--dry-run")
        .arg("-j")
        .arg(ws.backup())
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run"));

    assert!(!ws.path("notes_arxiv.txt").exists());
    assert_eq!(ws.read("notes.txt"), MARKDOWN);
    Ok(())
}

#[test]
fn document_without_links() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let input = ws.write("plain.md", "Nothing to convert here.\n");

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(&input)
        .arg("-j")
        .arg(ws.backup())
        .assert()
        .success()
        .stderr(predicate::str::contains("No URLs found"));

    assert_eq!(ws.read("plain_arxiv.md"), "Nothing to convert here.\n");
    Ok(())
}

#[test]
fn missing_backup_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let input = ws.write("papers.md", MARKDOWN);

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(&input)
        .arg("-j")
        .arg(ws.path("absent.json"))
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("backup data not found")
                .and(predicate::str::contains("paperswithcode-data")),
        );

    assert!(!ws.path("papers_arxiv.md").exists());
    Ok(())
}

#[test]
fn malformed_backup_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();
    let input = ws.write("papers.md", MARKDOWN);
    let bad = ws.write("bad.json", r#"{"paper_url": "https://paperswithcode.com/paper/x"}"#);

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(&input)
        .arg("-j")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed backup data"));
    Ok(())
}

#[test]
fn missing_input_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(ws.path("ghost.md"))
        .arg("-j")
        .arg(ws.backup())
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
    Ok(())
}

#[test]
fn missing_input_is_reported_before_loading_backup() -> Result<(), Box<dyn std::error::Error>> {
    let ws = Workspace::new();

    Command::cargo_bin("pwc2arxiv")?
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(ws.path("ghost.md"))
        .arg("-j")
        .arg(ws.path("absent.json"))
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("input file not found")
                .and(predicate::str::contains("backup data not found").not())
                .and(predicate::str::contains("Loaded").not()),
        );
    Ok(())
}
