use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const STRICT_SALT_HINT: &str = "e@c*x6d-q#J8U&F^%H+t7Y!L1P4M5I$g0S2A?R3o9n";

/// The binary with its settings file redirected into `dir`.
fn hintpass_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hintpass").unwrap();
    cmd.env("HINTPASS_SETTINGS", dir.path().join("settings"))
        .env_remove("RUST_LOG");
    cmd
}

mod generation {
    use super::*;

    #[test]
    fn default_options() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .arg("hello")
            .assert()
            .success()
            .stdout("E9UZLvusQTdf5GYE83tk\n");
    }

    #[test]
    fn inputs_are_written_in_order() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["salt", "hint"])
            .assert()
            .success()
            .stdout("eHpky88e2vYyx6baOBX@\n");

        hintpass_cmd(&dir)
            .args(["hint", "salt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("eHpky88e2vYyx6baOBX@").not());
    }

    #[test]
    fn strict_maximum_length() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-a", "nuls", "-l", "0", "-S", "salt", "hint"])
            .assert()
            .success()
            .stdout(format!("{STRICT_SALT_HINT}\n"));
    }

    #[test]
    fn long_flags_match_short_flags() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args([
                "--alphabet",
                "nuls",
                "--length",
                "0",
                "--unique",
                "--no-category-repetition",
                "--no-letter-repetition",
                "salt",
                "hint",
            ])
            .assert()
            .success()
            .stdout(format!("{STRICT_SALT_HINT}\n"));
    }

    #[test]
    fn literal_alphabet() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-a", "n|_-", "-l", "8", "salt"])
            .assert()
            .success()
            .stdout("69038163\n");
    }

    #[test]
    fn unique_digits() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-a", "n", "-l", "10", "-U", "salthint"])
            .assert()
            .success()
            .stdout("5986271430\n");
    }

    #[test]
    fn unreachable_complexity_fails() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-a", "n", "-l", "11", "-U", "salthint"])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("unreachable complexity"));
    }

    #[test]
    fn double_dash_ends_flags() {
        let dir = TempDir::new().unwrap();
        let dashed = hintpass_cmd(&dir)
            .args(["--", "-l"])
            .output()
            .expect("Failed to execute");
        assert!(dashed.status.success());
        assert_eq!(dashed.stdout.len(), "E9UZLvusQTdf5GYE83tk\n".len());
    }
}

mod input_sources {
    use super::*;

    #[test]
    fn stdin_follows_arguments() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-S", "-l", "0", "salt", "--stdin"])
            .write_stdin("hint\n")
            .assert()
            .success()
            .stdout(format!("{STRICT_SALT_HINT}\n"));
    }

    #[test]
    fn stdin_keeps_inner_newlines() {
        let dir = TempDir::new().unwrap();
        let one = hintpass_cmd(&dir)
            .arg("-i")
            .write_stdin("salthint")
            .output()
            .expect("Failed to execute");
        assert_eq!(one.stdout, b"eHpky88e2vYyx6baOBX@\n");

        let two = hintpass_cmd(&dir)
            .arg("-i")
            .write_stdin("salt\nhint\n")
            .output()
            .expect("Failed to execute");
        assert_ne!(one.stdout, two.stdout);
    }

    #[test]
    fn no_input_fails() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .assert()
            .failure()
            .stderr(predicate::str::contains("No input given"));
    }

    #[test]
    fn prompt_without_terminal_fails() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .arg("--prompt")
            .assert()
            .failure()
            .stdout("");
    }
}

mod settings {
    use super::*;

    #[test]
    fn saved_defaults_are_reused() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-c", "-a", "n", "-l", "10", "-U"])
            .assert()
            .success()
            .stdout("")
            .stderr(predicate::str::contains("Defaults saved"));

        assert!(dir.path().join("settings").exists());

        hintpass_cmd(&dir)
            .arg("salthint")
            .assert()
            .success()
            .stdout("5986271430\n");
    }

    #[test]
    fn command_with_input_saves_and_generates() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-q", "-c", "-a", "n|_-", "-l", "8", "salt"])
            .assert()
            .success()
            .stdout("69038163\n")
            .stderr("");

        let saved = fs::read_to_string(dir.path().join("settings")).unwrap();
        assert!(!saved.contains("salt"));
    }

    #[test]
    fn default_flag_ignores_saved() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-q", "-c", "-a", "n", "-l", "10", "-U"])
            .assert()
            .success();

        hintpass_cmd(&dir)
            .args(["-d", "hello"])
            .assert()
            .success()
            .stdout("E9UZLvusQTdf5GYE83tk\n");
    }

    #[test]
    fn command_saves_only_the_given_flags() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-q", "-c", "-U", "-l", "12"])
            .assert()
            .success();
        assert_eq!(
            fs::read_to_string(dir.path().join("settings")).unwrap(),
            "nuls,12,true,false,false\n"
        );

        hintpass_cmd(&dir)
            .args(["-q", "-c", "-L"])
            .assert()
            .success();
        assert_eq!(
            fs::read_to_string(dir.path().join("settings")).unwrap(),
            "nuls,20,false,false,true\n"
        );
    }

    #[test]
    fn run_flags_add_to_saved_rules() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-q", "-c", "-a", "n", "-l", "10"])
            .assert()
            .success();

        hintpass_cmd(&dir)
            .args(["-U", "salthint"])
            .assert()
            .success()
            .stdout("5986271430\n");

        let saved = fs::read_to_string(dir.path().join("settings")).unwrap();
        assert_eq!(saved, "n,10,false,false,false\n");
    }

    #[test]
    fn command_with_inputs_but_no_flags_is_rejected() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-q", "-c", "-l", "10"])
            .assert()
            .success();

        hintpass_cmd(&dir)
            .args(["-c", "salt"])
            .assert()
            .failure()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("needs flags to save"));
        assert!(dir.path().join("settings").exists());
    }

    #[test]
    fn command_alone_clears() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-q", "-c", "-l", "10"])
            .assert()
            .success();
        assert!(dir.path().join("settings").exists());

        hintpass_cmd(&dir)
            .arg("-c")
            .assert()
            .success()
            .stderr(predicate::str::contains("cleared"));
        assert!(!dir.path().join("settings").exists());

        hintpass_cmd(&dir)
            .arg("hello")
            .assert()
            .success()
            .stdout("E9UZLvusQTdf5GYE83tk\n");
    }
}

mod info {
    use super::*;

    #[test]
    fn help() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE:"))
            .stdout(predicate::str::contains("--alphabet"));
    }

    #[test]
    fn version() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .arg("-v")
            .assert()
            .success()
            .stdout(format!("hintpass {}\n", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .arg("--nope")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Unknown argument: --nope"));
    }

    #[test]
    fn bad_length() {
        let dir = TempDir::new().unwrap();
        hintpass_cmd(&dir)
            .args(["-l", "ten", "x"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid number: ten"));
    }
}
