#![allow(dead_code)]

use std::{
    env, fs,
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
    process::Command,
};

use clite::{
    analyzer::analyze,
    ast::TranslationUnit,
    errors::{Diagnostic, ErrorKind, SemanticError},
    lexer::tokenize,
};

pub struct ExpectedError {
    kind: ErrorKind,
    line: usize,
    message: Option<String>,
}

pub struct Test {
    name: String,
    source: Option<String>,
    should_analyze: Option<bool>,
    expected_error: Option<ExpectedError>,
    expected_dump: Option<String>,
    inspect: Option<Box<dyn FnOnce(&TranslationUnit)>>,
    run_cli: Option<Box<dyn FnOnce(ExecutionResult)>>,
    cli_args: Vec<String>,
}

impl Test {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: None,
            should_analyze: None,
            expected_error: None,
            expected_dump: None,
            inspect: None,
            run_cli: None,
            cli_args: vec!["--dump".to_string(), "--color=never".to_string()],
        }
    }

    pub fn add_source(&mut self, source: &str) -> &mut Self {
        self.source = Some(source.trim().to_string());
        self
    }

    pub fn analyzes(&mut self, should_succeed: bool) -> &mut Self {
        self.should_analyze = Some(should_succeed);
        self
    }

    pub fn fails_with(&mut self, kind: ErrorKind, line: usize) -> &mut Self {
        self.should_analyze = Some(false);
        self.expected_error = Some(ExpectedError {
            kind,
            line,
            message: None,
        });
        self
    }

    pub fn message(&mut self, message: &str) -> &mut Self {
        if let Some(expected) = &mut self.expected_error {
            expected.message = Some(message.to_string());
        }
        self
    }

    pub fn dump_eq(&mut self, expected: &str) -> &mut Self {
        self.expected_dump = Some(expected.to_string());
        self
    }

    pub fn inspect<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&TranslationUnit) + 'static,
    {
        self.inspect = Some(Box::new(f));
        self
    }

    pub fn execute<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(ExecutionResult) + 'static,
    {
        self.run_cli = Some(Box::new(f));
        self
    }

    /// Replaces the default `--dump --color=never` flags passed before `main.c`.
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.cli_args = args.iter().map(|a| a.to_string()).collect();
        self
    }

    fn check_error(&self, err: &SemanticError) {
        let Some(expected) = &self.expected_error else {
            return;
        };
        assert_eq!(err.kind(), expected.kind, "wrong error kind: {err}");
        assert_eq!(err.origin().line(), expected.line, "wrong line: {err}");
        if let Some(message) = &expected.message {
            assert_eq!(err.message(), message);
        }
    }

    fn test_dir(&self) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        self.name.hash(&mut hasher);
        Path::new(env!("CARGO_TARGET_TMPDIR")).join(format!("{:016x}", hasher.finish()))
    }
}

pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn exit_code(&self, expected: i32) -> &Self {
        assert_eq!(self.exit_code, expected, "stderr: {}", self.stderr);
        self
    }

    pub fn stdout(&self, expected: &str) -> &Self {
        assert_eq!(self.stdout, expected);
        self
    }

    pub fn stderr(&self, expected: &str) -> &Self {
        assert_eq!(self.stderr, expected);
        self
    }
}

impl Drop for Test {
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }

        let source = self.source.clone().expect("test has no source");
        let mut tokens = match tokenize(source.clone(), Path::new("main.c")) {
            Ok(t) => t,
            Err(e) => panic!("Tokenization failed in '{}': {}", self.name, e),
        };

        match analyze(&mut tokens) {
            Ok(unit) => {
                if self.should_analyze == Some(false) {
                    panic!("Analysis of '{}' succeeded but was expected to fail", self.name);
                }
                assert!(tokens.is_exhausted());

                if let Some(expected) = &self.expected_dump {
                    assert_eq!(&unit.display(false).unwrap(), expected);
                }
                if let Some(inspect) = self.inspect.take() {
                    inspect(&unit);
                }
            }
            Err(e) => {
                if self.should_analyze != Some(false) {
                    panic!("Analysis of '{}' failed: {}", self.name, e);
                }
                self.check_error(&e);
            }
        }

        if let Some(run) = self.run_cli.take() {
            let test_dir = self.test_dir();
            if let Err(e) = fs::create_dir_all(&test_dir) {
                panic!("Failed to create test directory: {}", e);
            }
            let main_path = test_dir.join("main.c");
            if let Err(e) = fs::write(&main_path, &source) {
                panic!("Failed to write source file: {}", e);
            }

            let output = Command::new(env!("CARGO_BIN_EXE_clite"))
                .args(&self.cli_args)
                .arg("main.c")
                .current_dir(&test_dir)
                .output()
                .unwrap_or_else(|e| panic!("Failed to run clite: {}", e));

            run(ExecutionResult {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });

            if env::var("CLITE_DEBUG_TESTS").is_err() {
                let _ = fs::remove_dir_all(&test_dir);
            }
        }
    }
}

pub fn it(name: &str, f: impl FnOnce(&mut Test)) {
    let mut test = Test::new(name);
    f(&mut test);
}
