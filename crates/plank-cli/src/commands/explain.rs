//! `plank explain`: which rule, if any, transforms each module.

use std::fmt::Write as _;
use std::path::Path;

use plank_config::{BuildPlan, RuleAction};

use crate::cli::ExplainArgs;
use crate::commands::utils;
use crate::error::Result;

pub fn execute(args: ExplainArgs) -> Result<()> {
    let plan = utils::load_plan(&args.mode, &args.project)?;
    for path in &args.paths {
        println!("{}", describe(&plan, path));
    }
    Ok(())
}

/// One line per module: the matched rule and its steps in the order they run.
pub fn describe(plan: &BuildPlan, path: &Path) -> String {
    let mut line = format!("{}: ", path.display());

    match plan.rule_for(path) {
        None => line.push_str("passthrough"),
        Some(rule) => match &rule.action {
            RuleAction::Asset => {
                let _ = write!(line, "{} (asset)", rule.name);
            }
            RuleAction::Chain(_) => {
                let steps: Vec<_> = rule.application_order().map(|s| s.engine_name()).collect();
                let _ = write!(line, "{} ({})", rule.name, steps.join(" -> "));
            }
        },
    }

    if plan.watch.is_ignored(path) {
        line.push_str(" [not watched]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use plank_config::{InvocationContext, Mode, build_plan};

    fn plan() -> BuildPlan {
        build_plan(InvocationContext::new(Mode::Development)).unwrap()
    }

    #[test]
    fn describes_chain_in_application_order() {
        assert_eq!(
            describe(&plan(), Path::new("lib/app.css")),
            "lib/app.css: styles (css-loader -> style-loader)"
        );
        assert_eq!(
            describe(&plan(), Path::new("lib/entry.tsx")),
            "lib/entry.tsx: scripts (babel-loader)"
        );
    }

    #[test]
    fn describes_assets_and_passthrough() {
        assert_eq!(describe(&plan(), Path::new("a.png")), "a.png: images (asset)");
        assert_eq!(describe(&plan(), Path::new("a.json")), "a.json: passthrough");
    }

    #[test]
    fn marks_dependency_modules() {
        assert_eq!(
            describe(&plan(), Path::new("node_modules/react/index.js")),
            "node_modules/react/index.js: passthrough [not watched]"
        );
    }
}
