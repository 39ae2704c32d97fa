#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use plank_config::{ConfigError, Mode};
    use std::path::PathBuf;

    #[test]
    fn parses_plan_with_equals_syntax() {
        let cli = Cli::try_parse_from(["plank", "plan", "--mode=production"]).unwrap();
        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.mode.context().unwrap().mode, Mode::Production);
        assert!(args.out.is_none());
        assert!(args.project.config_dir.is_none());
    }

    #[test]
    fn unknown_mode_parses_but_fails_validation() {
        let cli = Cli::try_parse_from(["plank", "plan", "--mode", "staging"]).unwrap();
        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert!(matches!(
            args.mode.context().unwrap_err(),
            ConfigError::UnknownMode { .. }
        ));
    }

    #[test]
    fn plan_requires_mode() {
        assert!(Cli::try_parse_from(["plank", "plan"]).is_err());
    }

    #[test]
    fn explain_takes_paths() {
        let cli = Cli::try_parse_from([
            "plank",
            "explain",
            "--mode",
            "development",
            "lib/a.tsx",
            "lib/b.css",
        ])
        .unwrap();
        let Command::Explain(args) = cli.command else {
            panic!("expected explain command");
        };
        assert_eq!(args.paths, vec![PathBuf::from("lib/a.tsx"), PathBuf::from("lib/b.css")]);
    }

    #[test]
    fn explain_requires_a_path() {
        assert!(Cli::try_parse_from(["plank", "explain", "--mode", "development"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["plank", "check", "--config-dir", "app", "--verbose"]).unwrap();
        assert!(cli.verbose);
        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.project.config_dir, Some(PathBuf::from("app")));
    }

    #[test]
    fn plan_accepts_config_dir() {
        let cli = Cli::try_parse_from([
            "plank",
            "plan",
            "--mode=production",
            "--config-dir",
            "app",
            "--out",
            "plan.json",
        ])
        .unwrap();
        let Command::Plan(args) = cli.command else {
            panic!("expected plan command");
        };
        assert_eq!(args.project.config_dir, Some(PathBuf::from("app")));
        assert_eq!(args.out, Some(PathBuf::from("plan.json")));
    }

    #[test]
    fn manifest_accepts_config_dir() {
        let cli =
            Cli::try_parse_from(["plank", "manifest", "--mode", "development", "--config-dir=web"])
                .unwrap();
        let Command::Manifest(args) = cli.command else {
            panic!("expected manifest command");
        };
        assert_eq!(args.project.config_dir, Some(PathBuf::from("web")));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["plank", "-v", "-q", "check"]).is_err());
    }
}
