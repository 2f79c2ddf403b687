use std::collections::HashMap;

use super::artifact::ExecutorData;
use super::container::{HealthcheckOptions, Resources, SingularityContainerInfo};
use super::load_balancer::SingularityLoadBalancerUpdate;
use super::task::SingularityTaskId;

dto_enum! {
    pub enum DeployState {
        Succeeded = "SUCCEEDED",
        FailedInternalState = "FAILED_INTERNAL_STATE",
        Canceling = "CANCELING",
        Waiting = "WAITING",
        Overdue = "OVERDUE",
        Failed = "FAILED",
        Canceled = "CANCELED",
    }
}

dto_enum! {
    pub enum DeployFailureReason {
        TaskFailedOnStartup = "TASK_FAILED_ON_STARTUP",
        TaskFailedHealthChecks = "TASK_FAILED_HEALTH_CHECKS",
        TaskCouldNotBeScheduled = "TASK_COULD_NOT_BE_SCHEDULED",
        TaskNeverEnteredRunning = "TASK_NEVER_ENTERED_RUNNING",
        TaskExpectedRunningFinished = "TASK_EXPECTED_RUNNING_FINISHED",
        DeployCancelled = "DEPLOY_CANCELLED",
        DeployOverdue = "DEPLOY_OVERDUE",
        FailedToSaveDeployState = "FAILED_TO_SAVE_DEPLOY_STATE",
        LoadBalancerUpdateFailed = "LOAD_BALANCER_UPDATE_FAILED",
        PendingDeployRemoved = "PENDING_DEPLOY_REMOVED",
    }
}

dto_enum! {
    pub enum DeployEventType {
        Starting = "STARTING",
        Finished = "FINISHED",
    }
}

dto! {
    /// A versioned description of how to run a request's tasks: command,
    /// container, resources and health checking.
    pub struct SingularityDeploy {
        arguments: Vec<String> = "arguments",
        auto_advance_deploy_steps: bool = "autoAdvanceDeploySteps",
        command: String = "command",
        consider_healthy_after_running_for_seconds: i64 = "considerHealthyAfterRunningForSeconds",
        container_info: SingularityContainerInfo = "containerInfo",
        custom_executor_cmd: String = "customExecutorCmd",
        custom_executor_id: String = "customExecutorId",
        custom_executor_resources: Resources = "customExecutorResources",
        custom_executor_source: String = "customExecutorSource",
        custom_executor_user: String = "customExecutorUser",
        deploy_health_timeout_seconds: i64 = "deployHealthTimeoutSeconds",
        deploy_instance_count_per_step: i32 = "deployInstanceCountPerStep",
        deploy_step_wait_time_ms: i32 = "deployStepWaitTimeMs",
        env: HashMap<String, String> = "env",
        executor_data: ExecutorData = "executorData",
        healthcheck: HealthcheckOptions = "healthcheck",
        healthcheck_interval_seconds: i64 = "healthcheckIntervalSeconds",
        healthcheck_max_retries: i32 = "healthcheckMaxRetries",
        healthcheck_max_total_timeout_seconds: i64 = "healthcheckMaxTotalTimeoutSeconds",
        healthcheck_port_index: i32 = "healthcheckPortIndex",
        healthcheck_timeout_seconds: i64 = "healthcheckTimeoutSeconds",
        healthcheck_uri: String = "healthcheckUri",
        id: String = "id",
        labels: HashMap<String, String> = "labels",
        load_balancer_groups: Vec<String> = "loadBalancerGroups",
        load_balancer_port_index: i32 = "loadBalancerPortIndex",
        max_task_retries: i32 = "maxTaskRetries",
        metadata: HashMap<String, String> = "metadata",
        request_id: String = "requestId",
        resources: Resources = "resources",
        service_base_path: String = "serviceBasePath",
        skip_healthchecks_on_deploy: bool = "skipHealthchecksOnDeploy",
        timestamp: i64 = "timestamp",
        uris: Vec<String> = "uris",
        version: String = "version",
    }
    list SingularityDeployList;
}

dto! {
    pub struct SingularityDeployFailure {
        message: String = "message",
        reason: DeployFailureReason = "reason",
        task_id: SingularityTaskId = "taskId",
    }
    list SingularityDeployFailureList;
}

dto! {
    pub struct SingularityDeployHistory {
        deploy: SingularityDeploy = "deploy",
        deploy_marker: SingularityDeployMarker = "deployMarker",
        deploy_result: SingularityDeployResult = "deployResult",
        deploy_statistics: SingularityDeployStatistics = "deployStatistics",
    }
    list SingularityDeployHistoryList;
}

dto! {
    /// Points at one deploy of one request.
    pub struct SingularityDeployMarker {
        deploy_id: String = "deployId",
        message: String = "message",
        request_id: String = "requestId",
        timestamp: i64 = "timestamp",
        user: String = "user",
    }
    list SingularityDeployMarkerList;
}

dto! {
    pub struct SingularityDeployProgress {
        auto_advance_deploy_steps: bool = "autoAdvanceDeploySteps",
        deploy_instance_count_per_step: i32 = "deployInstanceCountPerStep",
        deploy_step_wait_time_ms: i64 = "deployStepWaitTimeMs",
        failed_deploy_tasks: Vec<SingularityTaskId> = "failedDeployTasks",
        step_complete: bool = "stepComplete",
        target_active_instances: i32 = "targetActiveInstances",
        timestamp: i64 = "timestamp",
    }
    list SingularityDeployProgressList;
}

dto! {
    pub struct SingularityDeployRequest {
        deploy: SingularityDeploy = "deploy",
        message: String = "message",
        unpause_on_successful_deploy: bool = "unpauseOnSuccessfulDeploy",
    }
    list SingularityDeployRequestList;
}

dto! {
    pub struct SingularityDeployResult {
        deploy_failures: Vec<SingularityDeployFailure> = "deployFailures",
        deploy_state: DeployState = "deployState",
        lb_update: SingularityLoadBalancerUpdate = "lbUpdate",
        message: String = "message",
        timestamp: i64 = "timestamp",
    }
    list SingularityDeployResultList;
}

dto! {
    pub struct SingularityDeployStatistics {
        average_runtime_millis: i64 = "averageRuntimeMillis",
        deploy_id: String = "deployId",
        last_finish_at: i64 = "lastFinishAt",
        num_failures: i32 = "numFailures",
        num_sequential_retries: i32 = "numSequentialRetries",
        num_success: i32 = "numSuccess",
        num_tasks: i32 = "numTasks",
        request_id: String = "requestId",
    }
    list SingularityDeployStatisticsList;
}

dto! {
    pub struct SingularityDeployUpdate {
        deploy: SingularityDeploy = "deploy",
        deploy_marker: SingularityDeployMarker = "deployMarker",
        deploy_result: SingularityDeployResult = "deployResult",
        event_type: DeployEventType = "eventType",
    }
    list SingularityDeployUpdateList;
}

dto! {
    pub struct SingularityPendingDeploy {
        current_deploy_state: DeployState = "currentDeployState",
        deploy_marker: SingularityDeployMarker = "deployMarker",
        deploy_progress: SingularityDeployProgress = "deployProgress",
        last_load_balancer_update: SingularityLoadBalancerUpdate = "lastLoadBalancerUpdate",
    }
    list SingularityPendingDeployList;
}

dto! {
    pub struct SingularityUpdatePendingDeployRequest {
        deploy_id: String = "deployId",
        request_id: String = "requestId",
        target_active_instances: i32 = "targetActiveInstances",
    }
    list SingularityUpdatePendingDeployRequestList;
}

dto! {
    /// The active and pending deploys of a request.
    pub struct SingularityRequestDeployState {
        active_deploy: SingularityDeployMarker = "activeDeploy",
        pending_deploy: SingularityDeployMarker = "pendingDeploy",
        request_id: String = "requestId",
    }
    list SingularityRequestDeployStateList;
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::{
        DeployState, SingularityDeploy, SingularityDeployHistory, SingularityRequestDeployState,
    };
    use crate::models::container::ContainerType;
    use crate::swagger::{Dto, Fielder};

    #[test]
    fn docker_deploy_round_trips() {
        let payload = json!({
            "id": "d1",
            "requestId": "webapp",
            "command": "",
            "containerInfo": {
                "type": "DOCKER",
                "docker": {
                    "image": "nginx:1.21",
                    "network": "BRIDGE",
                    "portMappings": [{
                        "containerPort": 80,
                        "containerPortType": "LITERAL",
                        "hostPort": 0,
                        "hostPortType": "FROM_OFFER",
                        "protocol": "tcp"
                    }]
                },
                "volumes": [{"containerPath": "/data", "hostPath": "/mnt/data", "mode": "RW"}]
            },
            "resources": {"cpus": 1.0, "memoryMb": 256.0, "numPorts": 1},
            "healthcheck": {"uri": "/health", "portIndex": 0, "protocol": "http"},
            "env": {"PORT": "8080"},
            "uris": []
        });

        let mut deploy = SingularityDeploy::default();
        deploy.populate(payload.to_string().as_bytes()).unwrap();

        let container = deploy.container_info.as_ref().unwrap();
        assert_eq!(container.r#type, Some(ContainerType::Docker));
        assert_eq!(container.docker.as_ref().unwrap().port_mappings.as_ref().unwrap().len(), 1);
        assert_eq!(deploy.uris, Some(vec![]));
        assert_eq!(deploy.command.as_deref(), Some(""));

        let marshalled: Value = serde_json::from_str(&deploy.marshal_json().unwrap()).unwrap();
        assert_eq!(marshalled, payload);
    }

    #[test]
    fn history_exposes_nested_fields_by_name() {
        let mut history = SingularityDeployHistory::default();
        history
            .set_field(
                "deployResult",
                json!({"deployState": "OVERDUE", "timestamp": 5, "deployFailures": []}),
            )
            .unwrap();

        let result = history.deploy_result.as_ref().unwrap();
        assert_eq!(result.deploy_state, Some(DeployState::Overdue));
        assert_eq!(result.fields_present(), vec!["deployFailures", "deployState", "timestamp"]);
        assert!(history.get_field("deploy").is_err());
    }

    #[test]
    fn deploy_state_reports_markers() {
        let mut state = SingularityRequestDeployState::default();
        let body = concat!(
            r#"{"requestId":"webapp","#,
            r#""activeDeploy":{"deployId":"d1","requestId":"webapp","timestamp":1}}"#,
        );
        state.populate(body.as_bytes()).unwrap();

        assert_eq!(state.fields_present(), vec!["activeDeploy", "requestId"]);
        assert_eq!(
            state.active_deploy.as_ref().and_then(|marker| marker.deploy_id.as_deref()),
            Some("d1")
        );
    }
}
