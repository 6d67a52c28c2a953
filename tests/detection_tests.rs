//! Compose entry point detection and top-level run tests

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use clap::Parser as _;
    use compose_deploy::cli::Args;
    use compose_deploy::compose::{InvocationMode, detect_invocation_mode};
    use compose_deploy::deploy::Deployer;
    use compose_deploy::error::DeployError;
    use compose_deploy::system::MockSystem;

    #[test]
    fn standalone_preferred_when_available() {
        let system = MockSystem::new()
            .with_response("docker-compose", "--version", 0, "docker-compose version 1.29.2\n")
            .unwrap();

        let mode = detect_invocation_mode(&system).unwrap();

        assert_eq!(mode, InvocationMode::Standalone);
        let invocations = system.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].argv(), vec!["docker-compose", "--version"]);
        assert!(invocations[0].captured);
    }

    #[test]
    fn plugin_used_when_standalone_fails() {
        let system = MockSystem::new()
            .with_exit_code("docker-compose", "--version", 127)
            .unwrap();

        let mode = detect_invocation_mode(&system).unwrap();

        assert_eq!(mode, InvocationMode::Plugin);
        let argvs: Vec<Vec<String>> = system.invocations().iter().map(|i| i.argv()).collect();
        assert_eq!(
            argvs,
            vec![
                vec!["docker-compose", "--version"],
                vec!["docker", "compose", "version"],
            ]
        );
    }

    #[test]
    fn plugin_used_when_standalone_missing() {
        let system = MockSystem::new()
            .with_missing_program("docker-compose")
            .unwrap();

        assert_eq!(
            detect_invocation_mode(&system).unwrap(),
            InvocationMode::Plugin
        );
    }

    #[test]
    fn detection_fails_when_neither_answers() {
        let system = MockSystem::new()
            .with_missing_program("docker-compose")
            .unwrap()
            .with_exit_code("docker", "version", 1)
            .unwrap();

        let result = detect_invocation_mode(&system);

        assert!(matches!(result, Err(DeployError::ComposeUnavailable)));
        assert!(system.inherited_invocations().is_empty());
    }

    #[test]
    fn deployer_not_constructed_without_compose_tool() {
        let system = MockSystem::new()
            .with_file("./docker-compose.yml", "services: {}\n")
            .unwrap()
            .with_missing_program("docker-compose")
            .unwrap()
            .with_missing_program("docker")
            .unwrap();

        let result = Deployer::new("docker-compose.yml", ".", &system);

        assert!(matches!(result, Err(DeployError::ComposeUnavailable)));
        assert_eq!(system.invocations().len(), 2);
    }

    #[test]
    fn run_reports_operation_outcome() {
        let system = MockSystem::new()
            .with_file("./docker-compose.yml", "services: {}\n")
            .unwrap();
        let args = Args::try_parse_from(["compose-deploy", "status"]).unwrap();

        assert!(compose_deploy::run(&args, &system).unwrap());

        let missing = MockSystem::new();
        assert!(!compose_deploy::run(&args, &missing).unwrap());
    }

    #[test]
    fn run_rejects_unknown_action_before_detection() {
        let system = MockSystem::new();
        let args = Args::try_parse_from(["compose-deploy", "deploy"]).unwrap();

        let err = compose_deploy::run(&args, &system).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<DeployError>(),
            Some(DeployError::UnknownAction { .. })
        ));
        assert!(system.invocations().is_empty());
    }

    #[test]
    fn run_propagates_detection_failure() {
        let system = MockSystem::new()
            .with_missing_program("docker-compose")
            .unwrap()
            .with_missing_program("docker")
            .unwrap();
        let args = Args::try_parse_from(["compose-deploy", "start"]).unwrap();

        let err = compose_deploy::run(&args, &system).unwrap_err();

        assert!(err.to_string().contains("docker-compose command not found"));
    }
}
