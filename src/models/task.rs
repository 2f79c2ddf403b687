use lazy_static::lazy_static;
use regex::Regex;

use super::deploy::SingularityDeploy;
use super::load_balancer::SingularityLoadBalancerUpdate;
use super::mesos::{Offer, TaskInfo};
use super::request::{PendingType, SingularityRequest};
use super::shell::SingularityTaskShellCommandHistory;
use crate::utils::error::Error;

// request ids may contain hyphens, every other part may not
lazy_static! {
    static ref TASK_ID_PATTERN: Result<Regex, regex::Error> = Regex::new(concat!(
        r"^(?P<request>.+)-(?P<deploy>[^-]+)-(?P<started>\d+)-(?P<instance>\d+)",
        r"-(?P<host>[^-]+)-(?P<rack>[^-]+)$",
    ));
}

dto_enum! {
    /// Lifecycle states a task moves through, Mesos states plus Singularity's own.
    pub enum ExtendedTaskState {
        Launched = "TASK_LAUNCHED",
        Staging = "TASK_STAGING",
        Starting = "TASK_STARTING",
        Running = "TASK_RUNNING",
        Cleaning = "TASK_CLEANING",
        Finished = "TASK_FINISHED",
        Failed = "TASK_FAILED",
        Killed = "TASK_KILLED",
        Lost = "TASK_LOST",
        LostWhileDown = "TASK_LOST_WHILE_DOWN",
        Error = "TASK_ERROR",
    }
}

impl ExtendedTaskState {
    /// Whether no further state transitions follow this one.
    pub fn is_done(&self) -> bool {
        matches!(
            self,
            ExtendedTaskState::Finished
                | ExtendedTaskState::Failed
                | ExtendedTaskState::Killed
                | ExtendedTaskState::Lost
                | ExtendedTaskState::LostWhileDown
                | ExtendedTaskState::Error
        )
    }
}

dto_enum! {
    pub enum TaskCleanupType {
        UserRequested = "USER_REQUESTED",
        UserRequestedTaskBounce = "USER_REQUESTED_TASK_BOUNCE",
        Decomissioning = "DECOMISSIONING",
        ScalingDown = "SCALING_DOWN",
        Bouncing = "BOUNCING",
        IncrementalBounce = "INCREMENTAL_BOUNCE",
        DeployFailed = "DEPLOY_FAILED",
        NewDeploySucceeded = "NEW_DEPLOY_SUCCEEDED",
        DeployStepFinished = "DEPLOY_STEP_FINISHED",
        DeployCanceled = "DEPLOY_CANCELED",
        UnhealthyNewTask = "UNHEALTHY_NEW_TASK",
        OverdueNewTask = "OVERDUE_NEW_TASK",
    }
}

dto_enum! {
    pub enum MetadataLevel {
        Info = "INFO",
        Warn = "WARN",
        Error = "ERROR",
    }
}

dto! {
    /// Identity of a single task: which request and deploy it runs for, which
    /// instance it is, when it started and where.
    pub struct SingularityTaskId {
        deploy_id: String = "deployId",
        host: String = "host",
        /// Composite id, `requestId-deployId-startedAt-instanceNo-sanitizedHost-sanitizedRackId`.
        id: String = "id",
        instance_no: i32 = "instanceNo",
        rack_id: String = "rackId",
        request_id: String = "requestId",
        sanitized_host: String = "sanitizedHost",
        sanitized_rack_id: String = "sanitizedRackId",
        started_at: i64 = "startedAt",
    }
    list SingularityTaskIdList;
}

impl SingularityTaskId {
    /// Builds a fully populated task id, deriving the sanitized host and rack
    /// and the composite `id`.
    pub fn new(
        request_id: &str,
        deploy_id: &str,
        started_at: i64,
        instance_no: i32,
        host: &str,
        rack_id: &str,
    ) -> Self {
        let sanitized_host = sanitize(host);
        let sanitized_rack_id = sanitize(rack_id);
        let id = format!(
            "{}-{}-{}-{}-{}-{}",
            request_id, deploy_id, started_at, instance_no, sanitized_host, sanitized_rack_id
        );

        SingularityTaskId {
            deploy_id: Some(deploy_id.to_string()),
            host: Some(host.to_string()),
            id: Some(id),
            instance_no: Some(instance_no),
            rack_id: Some(rack_id.to_string()),
            request_id: Some(request_id.to_string()),
            sanitized_host: Some(sanitized_host),
            sanitized_rack_id: Some(sanitized_rack_id),
            started_at: Some(started_at),
        }
    }

    /// Splits a composite task id back into its parts. Only the sanitized
    /// host and rack can be recovered, so `host` and `rackId` stay absent.
    pub fn parse(id: &str) -> Result<Self, Error> {
        let re = TASK_ID_PATTERN.as_ref().map_err(Clone::clone)?;
        let invalid = || Error::InvalidTaskId(id.to_string());

        let captures = re.captures(id).ok_or_else(invalid)?;
        let started_at = captures["started"].parse::<i64>().map_err(|_| invalid())?;
        let instance_no = captures["instance"].parse::<i32>().map_err(|_| invalid())?;

        Ok(SingularityTaskId {
            deploy_id: Some(captures["deploy"].to_string()),
            id: Some(id.to_string()),
            instance_no: Some(instance_no),
            request_id: Some(captures["request"].to_string()),
            sanitized_host: Some(captures["host"].to_string()),
            sanitized_rack_id: Some(captures["rack"].to_string()),
            started_at: Some(started_at),
            ..SingularityTaskId::default()
        })
    }
}

fn sanitize(value: &str) -> String {
    value.replace('-', "_")
}

dto! {
    pub struct SingularityTask {
        mesos_task: TaskInfo = "mesosTask",
        offer: Offer = "offer",
        rack_id: String = "rackId",
        task_id: SingularityTaskId = "taskId",
        task_request: SingularityTaskRequest = "taskRequest",
    }
    list SingularityTaskList;
}

dto! {
    pub struct SingularityTaskRequest {
        deploy: SingularityDeploy = "deploy",
        pending_task: SingularityPendingTask = "pendingTask",
        request: SingularityRequest = "request",
    }
    list SingularityTaskRequestList;
}

dto! {
    /// Everything recorded about a task over its lifetime.
    pub struct SingularityTaskHistory {
        directory: String = "directory",
        healthcheck_results: Vec<SingularityTaskHealthcheckResult> = "healthcheckResults",
        load_balancer_updates: Vec<SingularityLoadBalancerUpdate> = "loadBalancerUpdates",
        shell_command_history: Vec<SingularityTaskShellCommandHistory> = "shellCommandHistory",
        task: SingularityTask = "task",
        task_updates: Vec<SingularityTaskHistoryUpdate> = "taskUpdates",
    }
    list SingularityTaskHistoryList;
}

impl SingularityTaskHistory {
    /// The most recent state the task was seen in.
    pub fn last_state(&self) -> Option<ExtendedTaskState> {
        self.task_updates
            .as_ref()?
            .iter()
            .filter(|update| update.task_state.is_some())
            .max_by_key(|update| update.timestamp.unwrap_or_default())
            .and_then(|update| update.task_state.clone())
    }
}

dto! {
    /// A single state transition of a task.
    pub struct SingularityTaskHistoryUpdate {
        status_message: String = "statusMessage",
        status_reason: String = "statusReason",
        task_id: SingularityTaskId = "taskId",
        task_state: ExtendedTaskState = "taskState",
        timestamp: i64 = "timestamp",
    }
    list SingularityTaskHistoryUpdateList;
}

dto! {
    pub struct SingularityTaskIdHistory {
        run_id: String = "runId",
        task_id: SingularityTaskId = "taskId",
        updated_at: i64 = "updatedAt",
    }
    list SingularityTaskIdHistoryList;
}

dto! {
    pub struct SingularityTaskCleanup {
        action_id: String = "actionId",
        cleanup_type: TaskCleanupType = "cleanupType",
        message: String = "message",
        task_id: SingularityTaskId = "taskId",
        timestamp: i64 = "timestamp",
        user: String = "user",
    }
    list SingularityTaskCleanupList;
}

dto! {
    pub struct SingularityTaskHealthcheckResult {
        duration_millis: i64 = "durationMillis",
        error_message: String = "errorMessage",
        response_body: String = "responseBody",
        status_code: i32 = "statusCode",
        task_id: SingularityTaskId = "taskId",
        timestamp: i64 = "timestamp",
    }
    list SingularityTaskHealthcheckResultList;
}

dto! {
    pub struct SingularityKilledTaskIdRecord {
        original_timestamp: i64 = "originalTimestamp",
        retries: i32 = "retries",
        task_id: SingularityTaskId = "taskId",
        timestamp: i64 = "timestamp",
    }
    list SingularityKilledTaskIdRecordList;
}

dto! {
    pub struct SingularityTaskMetadata {
        level: MetadataLevel = "level",
        message: String = "message",
        task_id: SingularityTaskId = "taskId",
        timestamp: i64 = "timestamp",
        title: String = "title",
        r#type: String = "type",
        user: String = "user",
    }
    list SingularityTaskMetadataList;
}

dto! {
    pub struct SingularityTaskMetadataRequest {
        message: String = "message",
        title: String = "title",
        r#type: String = "type",
    }
    list SingularityTaskMetadataRequestList;
}

dto! {
    pub struct SingularityTaskReconciliationStatistics {
        task_reconciliation_started_at: i64 = "taskReconciliationStartedAt",
        task_reconciliation_duration_millis: i64 = "taskReconciliationDurationMillis",
        task_reconciliation_iterations: i32 = "taskReconciliationIterations",
        task_reconciliation_response_count: i64 = "taskReconciliationResponseCount",
        task_reconciliation_response_p95: f64 = "taskReconciliationResponseP95",
        task_reconciliation_response_p99: f64 = "taskReconciliationResponseP99",
        task_reconciliation_response_p50: f64 = "taskReconciliationResponseP50",
        task_reconciliation_response_p75: f64 = "taskReconciliationResponseP75",
        task_reconciliation_response_p999: f64 = "taskReconciliationResponseP999",
        task_reconciliation_response_p98: f64 = "taskReconciliationResponseP98",
        task_reconciliation_response_stddev: f64 = "taskReconciliationResponseStddev",
        task_reconciliation_response_max: i64 = "taskReconciliationResponseMax",
        task_reconciliation_response_mean: f64 = "taskReconciliationResponseMean",
        task_reconciliation_response_min: i64 = "taskReconciliationResponseMin",
    }
    list SingularityTaskReconciliationStatisticsList;
}

dto! {
    /// A task waiting to be launched.
    pub struct SingularityPendingTask {
        cmd_line_args_list: Vec<String> = "cmdLineArgsList",
        message: String = "message",
        pending_task_id: SingularityPendingTaskId = "pendingTaskId",
        run_id: String = "runId",
        skip_healthchecks: bool = "skipHealthchecks",
        user: String = "user",
    }
    list SingularityPendingTaskList;
}

dto! {
    pub struct SingularityPendingTaskId {
        created_at: i64 = "createdAt",
        deploy_id: String = "deployId",
        id: String = "id",
        instance_no: i32 = "instanceNo",
        next_run_at: i64 = "nextRunAt",
        pending_type: PendingType = "pendingType",
        request_id: String = "requestId",
    }
    list SingularityPendingTaskIdList;
}

dto! {
    pub struct SingularityKillTaskRequest {
        action_id: String = "actionId",
        message: String = "message",
        r#override: bool = "override",
        wait_for_replacement_task: bool = "waitForReplacementTask",
    }
    list SingularityKillTaskRequestList;
}
