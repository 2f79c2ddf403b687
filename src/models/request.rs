use std::collections::HashMap;

use super::container::Resources;
use super::deploy::{SingularityDeploy, SingularityPendingDeploy, SingularityRequestDeployState};
use super::expiring::{
    SingularityExpiringBounce, SingularityExpiringPause, SingularityExpiringScale,
    SingularityExpiringSkipHealthchecks,
};

dto_enum! {
    pub enum RequestType {
        Service = "SERVICE",
        Worker = "WORKER",
        Scheduled = "SCHEDULED",
        OnDemand = "ON_DEMAND",
        RunOnce = "RUN_ONCE",
    }
}

impl RequestType {
    /// Services and workers are restarted when they exit.
    pub fn is_long_running(&self) -> bool {
        matches!(self, RequestType::Service | RequestType::Worker)
    }
}

dto_enum! {
    pub enum RequestState {
        Active = "ACTIVE",
        Deleted = "DELETED",
        Paused = "PAUSED",
        SystemCooldown = "SYSTEM_COOLDOWN",
        Finished = "FINISHED",
        DeployingToUnpause = "DEPLOYING_TO_UNPAUSE",
    }
}

dto_enum! {
    pub enum RequestCleanupType {
        Deleting = "DELETING",
        Pausing = "PAUSING",
        Bounce = "BOUNCE",
        IncrementalBounce = "INCREMENTAL_BOUNCE",
    }
}

dto_enum! {
    pub enum RequestHistoryType {
        Created = "CREATED",
        Updated = "UPDATED",
        Deleted = "DELETED",
        Paused = "PAUSED",
        Unpaused = "UNPAUSED",
        EnteredCooldown = "ENTERED_COOLDOWN",
        ExitedCooldown = "EXITED_COOLDOWN",
        Finished = "FINISHED",
        DeployedToUnpause = "DEPLOYED_TO_UNPAUSE",
        Bounced = "BOUNCED",
        Scaled = "SCALED",
        ScaleReverted = "SCALE_REVERTED",
    }
}

dto_enum! {
    /// Why a request or task is waiting to be scheduled.
    pub enum PendingType {
        Immediate = "IMMEDIATE",
        Oneoff = "ONEOFF",
        Bounce = "BOUNCE",
        NewDeploy = "NEW_DEPLOY",
        NextDeployStep = "NEXT_DEPLOY_STEP",
        Unpaused = "UNPAUSED",
        Retry = "RETRY",
        UpdatedRequest = "UPDATED_REQUEST",
        DecomissionedSlaveOrRack = "DECOMISSIONED_SLAVE_OR_RACK",
        TaskDone = "TASK_DONE",
        Startup = "STARTUP",
        CancelBounce = "CANCEL_BOUNCE",
        TaskBounce = "TASK_BOUNCE",
        DeployCancelled = "DEPLOY_CANCELLED",
        DeployFailed = "DEPLOY_FAILED",
    }
}

dto! {
    /// A service, worker or job known to Singularity and how it is scheduled.
    pub struct SingularityRequest {
        allowed_slave_attributes: HashMap<String, String> = "allowedSlaveAttributes",
        bounce_after_scale: bool = "bounceAfterScale",
        group: String = "group",
        id: String = "id",
        instances: i32 = "instances",
        kill_old_non_long_running_tasks_after_millis: i64 = "killOldNonLongRunningTasksAfterMillis",
        load_balanced: bool = "loadBalanced",
        num_retries_on_failure: i32 = "numRetriesOnFailure",
        owners: Vec<String> = "owners",
        quartz_schedule: String = "quartzSchedule",
        rack_affinity: Vec<String> = "rackAffinity",
        rack_sensitive: bool = "rackSensitive",
        read_only_groups: Vec<String> = "readOnlyGroups",
        request_type: RequestType = "requestType",
        required_slave_attributes: HashMap<String, String> = "requiredSlaveAttributes",
        schedule: String = "schedule",
        scheduled_expected_runtime_millis: i64 = "scheduledExpectedRuntimeMillis",
        skip_healthchecks: bool = "skipHealthchecks",
        wait_at_least_millis_after_task_finishes_for_reschedule: i64 =
            "waitAtLeastMillisAfterTaskFinishesForReschedule",
    }
    list SingularityRequestList;
}

dto! {
    pub struct SingularityRequestCleanup {
        action_id: String = "actionId",
        cleanup_type: RequestCleanupType = "cleanupType",
        deploy_id: String = "deployId",
        kill_tasks: bool = "killTasks",
        message: String = "message",
        request_id: String = "requestId",
        skip_healthchecks: bool = "skipHealthchecks",
        timestamp: i64 = "timestamp",
        user: String = "user",
    }
    list SingularityRequestCleanupList;
}

dto! {
    pub struct SingularityRequestGroup {
        metadata: HashMap<String, String> = "metadata",
        id: String = "id",
        request_ids: Vec<String> = "requestIds",
    }
    list SingularityRequestGroupList;
}

dto! {
    pub struct SingularityRequestHistory {
        created_at: i64 = "createdAt",
        event_type: RequestHistoryType = "eventType",
        message: String = "message",
        request: SingularityRequest = "request",
        user: String = "user",
    }
    list SingularityRequestHistoryList;
}

dto! {
    /// A request together with its deploys and any pending expiring actions.
    pub struct SingularityRequestParent {
        active_deploy: SingularityDeploy = "activeDeploy",
        expiring_bounce: SingularityExpiringBounce = "expiringBounce",
        expiring_pause: SingularityExpiringPause = "expiringPause",
        expiring_scale: SingularityExpiringScale = "expiringScale",
        expiring_skip_healthchecks: SingularityExpiringSkipHealthchecks =
            "expiringSkipHealthchecks",
        pending_deploy: SingularityDeploy = "pendingDeploy",
        pending_deploy_state: SingularityPendingDeploy = "pendingDeployState",
        request: SingularityRequest = "request",
        request_deploy_state: SingularityRequestDeployState = "requestDeployState",
        state: RequestState = "state",
    }
    list SingularityRequestParentList;
}

dto! {
    pub struct SingularityPendingRequest {
        request_id: String = "requestId",
        deploy_id: String = "deployId",
        user: String = "user",
        skip_healthchecks: bool = "skipHealthchecks",
        message: String = "message",
        action_id: String = "actionId",
        resources: Resources = "resources",
        timestamp: i64 = "timestamp",
        pending_type: PendingType = "pendingType",
        cmd_line_args_list: Vec<String> = "cmdLineArgsList",
        run_id: String = "runId",
    }
    list SingularityPendingRequestList;
}

dto! {
    pub struct SingularityBounceRequest {
        action_id: String = "actionId",
        duration_millis: i64 = "durationMillis",
        incremental: bool = "incremental",
        message: String = "message",
        skip_healthchecks: bool = "skipHealthchecks",
    }
    list SingularityBounceRequestList;
}

dto! {
    pub struct SingularityDeleteRequestRequest {
        action_id: String = "actionId",
        message: String = "message",
    }
    list SingularityDeleteRequestRequestList;
}

dto! {
    pub struct SingularityExitCooldownRequest {
        action_id: String = "actionId",
        message: String = "message",
        skip_healthchecks: bool = "skipHealthchecks",
    }
    list SingularityExitCooldownRequestList;
}

dto! {
    pub struct SingularityPauseRequest {
        action_id: String = "actionId",
        duration_millis: i64 = "durationMillis",
        kill_tasks: bool = "killTasks",
        message: String = "message",
    }
    list SingularityPauseRequestList;
}

dto! {
    pub struct SingularityUnpauseRequest {
        action_id: String = "actionId",
        message: String = "message",
        skip_healthchecks: bool = "skipHealthchecks",
    }
    list SingularityUnpauseRequestList;
}

dto! {
    pub struct SingularityRunNowRequest {
        command_line_args: Vec<String> = "commandLineArgs",
        message: String = "message",
        run_id: String = "runId",
        skip_healthchecks: bool = "skipHealthchecks",
    }
    list SingularityRunNowRequestList;
}

dto! {
    pub struct SingularityScaleRequest {
        action_id: String = "actionId",
        duration_millis: i64 = "durationMillis",
        instances: i32 = "instances",
        message: String = "message",
        skip_healthchecks: bool = "skipHealthchecks",
    }
    list SingularityScaleRequestList;
}

dto! {
    pub struct SingularitySkipHealthchecksRequest {
        action_id: String = "actionId",
        duration_millis: i64 = "durationMillis",
        message: String = "message",
        skip_healthchecks: bool = "skipHealthchecks",
    }
    list SingularitySkipHealthchecksRequestList;
}

dto! {
    /// Stops tasks below a priority level from being scheduled.
    pub struct SingularityPriorityFreeze {
        action_id: String = "actionId",
        minimum_priority_level: f64 = "minimumPriorityLevel",
        kill_tasks: bool = "killTasks",
        message: String = "message",
    }
    list SingularityPriorityFreezeList;
}

dto! {
    pub struct SingularityPriorityFreezeParent {
        timestamp: i64 = "timestamp",
        user: String = "user",
        priority_freeze: SingularityPriorityFreeze = "priorityFreeze",
    }
    list SingularityPriorityFreezeParentList;
}
