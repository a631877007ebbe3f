//! Command planning for the checkout and generate stages.
//!
//! Each planner takes the queue built so far and returns it extended, so what
//! a stage contributes (and in which order) can be checked in isolation.

use crate::core::command::{CommandQueue, QueuedCommand};
use crate::core::config::PublishConfig;
use crate::core::paths::SitePaths;

/// Queue `git clone` + `git checkout` unless the web checkout already exists.
pub fn plan_checkout(
    mut queue: CommandQueue,
    paths: &SitePaths,
    config: &PublishConfig,
    web_dir_exists: bool,
) -> CommandQueue {
    if web_dir_exists {
        return queue;
    }
    queue.push(
        QueuedCommand::new("git")
            .arg("clone")
            .arg(&config.remote)
            .path_arg(&paths.web_dir),
    );
    queue.push(
        QueuedCommand::new("git")
            .arg("checkout")
            .arg(&config.branch)
            .in_dir(&paths.web_dir),
    );
    queue
}

/// Queue the generator run and the move of its output into the web checkout.
pub fn plan_generate(
    mut queue: CommandQueue,
    paths: &SitePaths,
    config: &PublishConfig,
) -> CommandQueue {
    queue.push(
        QueuedCommand::new(&config.generator)
            .arg("generate")
            .arg(format!("--url={}", config.redirect_target()))
            .arg(format!("--env={}", config.env))
            .in_dir(paths.locale_source_dir(&config.locale)),
    );
    queue.push(
        QueuedCommand::new("mv")
            .path_arg(&paths.generator_output_dir(&config.locale, &config.env))
            .path_arg(&paths.web_locale_dir(&config.locale)),
    );
    queue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> SitePaths {
        SitePaths::new("/srv/site/source")
    }

    #[test]
    fn missing_web_dir_queues_clone_then_checkout() {
        let queue = plan_checkout(
            CommandQueue::new(),
            &paths(),
            &PublishConfig::default(),
            false,
        );
        assert_eq!(
            queue.command_lines(),
            vec![
                "git clone git@github.com:fudriot/fabarea.tk.git /srv/site/web",
                "cd /srv/site/web; git checkout gh-pages",
            ]
        );
    }

    #[test]
    fn existing_web_dir_queues_nothing() {
        let queue = plan_checkout(
            CommandQueue::new(),
            &paths(),
            &PublishConfig::default(),
            true,
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn generate_appends_generator_then_move() {
        let mut queue = CommandQueue::new();
        queue.push(QueuedCommand::new("earlier"));
        let queue = plan_generate(queue, &paths(), &PublishConfig::default());
        assert_eq!(
            queue.command_lines(),
            vec![
                "earlier",
                "cd /srv/site/source/en; sculpin generate --url=/en --env=prod",
                "mv /srv/site/source/en/output_prod /srv/site/web/en",
            ]
        );
    }

    #[test]
    fn fresh_environment_plans_four_commands_in_order() {
        let config = PublishConfig::default();
        let queue = plan_checkout(CommandQueue::new(), &paths(), &config, false);
        let queue = plan_generate(queue, &paths(), &config);
        let programs: Vec<(&str, &str)> = queue
            .iter()
            .map(|cmd| (cmd.program.as_str(), cmd.args[0].as_str()))
            .collect();
        assert_eq!(
            programs,
            vec![
                ("git", "clone"),
                ("git", "checkout"),
                ("sculpin", "generate"),
                ("mv", "/srv/site/source/en/output_prod"),
            ]
        );
    }

    #[test]
    fn configured_values_flow_into_commands() {
        let config = PublishConfig {
            remote: "https://example.com/site.git".to_string(),
            branch: "pages".to_string(),
            locale: "fr".to_string(),
            env: "staging".to_string(),
            generator: "vendor/bin/sculpin".to_string(),
            ..PublishConfig::default()
        };
        let queue = plan_checkout(CommandQueue::new(), &paths(), &config, false);
        let queue = plan_generate(queue, &paths(), &config);
        assert_eq!(
            queue.command_lines(),
            vec![
                "git clone https://example.com/site.git /srv/site/web",
                "cd /srv/site/web; git checkout pages",
                "cd /srv/site/source/fr; vendor/bin/sculpin generate --url=/fr --env=staging",
                "mv /srv/site/source/fr/output_staging /srv/site/web/fr",
            ]
        );
    }
}
