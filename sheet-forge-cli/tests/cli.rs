use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SETS: &str = "\
名字,ID,套装需求1,套装效果1,套装需求2,套装效果2,套装效果简略描述,状态效果ID,状态效果ID
烈焰,101,2,攻击+10%,4,燃烧+20%,火系强化,5001,5002
";

const ITEMS: &str = "\
卡牌标题,ID,基础效果,套装1,标签颜色,价格
火之心,2001,攻击+5,烈焰,1,100
";

fn sheet_forge(dir: &Path, args: &[&str]) -> Output {
    let config = dir.join("settings.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_sheet-forge"))
        .current_dir(dir)
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn artifacts_command_writes_json() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sets.csv"), SETS).unwrap();
    fs::write(tmp.path().join("items.csv"), ITEMS).unwrap();

    let output = sheet_forge(
        tmp.path(),
        &["artifacts", "items.csv", "sets.csv", "-o", "out/artifacts.json", "--budget", "30"],
    );
    assert!(output.status.success(), "{}", stdout(&output));
    assert!(stdout(&output).contains("(1 entries)"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("out/artifacts.json")).unwrap())
            .unwrap();
    let description = json["value"][0]["value"]["value"]["value"][4]["value"]
        .as_str()
        .unwrap();
    assert!(description.ends_with("火系强化"));
}

#[test]
fn strict_budget_fails_the_run() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sets.csv"), SETS).unwrap();
    fs::write(tmp.path().join("items.csv"), ITEMS).unwrap();

    let output = sheet_forge(
        tmp.path(),
        &["artifacts", "items.csv", "sets.csv", "-o", "a.json", "--budget", "3", "--strict-budget"],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("over the 3-char budget"));
    assert!(!stdout(&output).contains("over the 3-char budget"));
    assert!(!tmp.path().join("a.json").exists());
}

#[test]
fn set_text_and_logfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("sets.csv"), SETS).unwrap();

    let output = sheet_forge(
        tmp.path(),
        &["set-text", "sets.csv", "-o", "sets.txt", "--logfile", "run.log"],
    );
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(tmp.path().join("sets.txt")).unwrap(),
        "烈焰\n2件套：攻击+10%  4件套：燃烧+20%\n"
    );
    let log = fs::read_to_string(tmp.path().join("run.log")).unwrap();
    assert!(log.contains("Wrote sets.txt (1 entries)"));
    assert!(!log.contains('\x1b'));
}

#[test]
fn missing_column_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("intros.csv"), "ID,名字\n1,a\n").unwrap();

    let output = sheet_forge(tmp.path(), &["intros", "intros.csv", "-o", "i.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("元件ID"));
}

#[test]
fn intro_column_flags_rename_columns() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("intros.csv"), "Entity,Name,Text\n77,a,hello\n").unwrap();

    let output = sheet_forge(
        tmp.path(),
        &[
            "intros", "intros.csv", "-o", "i.json", "--id-col", "Entity", "--name-col", "Name",
            "--desc-col", "Text",
        ],
    );
    assert!(output.status.success(), "{}", stdout(&output));
    let written = fs::read_to_string(tmp.path().join("i.json")).unwrap();
    assert!(written.contains("hello"));
}
