use std::collections::HashMap;

dto_enum! {
    /// Lifecycle of a slave or rack as Singularity tracks it.
    pub enum MachineState {
        MissingOnStartup = "MISSING_ON_STARTUP",
        Active = "ACTIVE",
        StartingDecommission = "STARTING_DECOMMISSION",
        Decommissioning = "DECOMMISSIONING",
        Decommissioned = "DECOMMISSIONED",
        Dead = "DEAD",
        Frozen = "FROZEN",
    }
}

impl MachineState {
    pub fn is_decommissioning(&self) -> bool {
        matches!(
            self,
            MachineState::StartingDecommission
                | MachineState::Decommissioning
                | MachineState::Decommissioned
        )
    }
}

dto! {
    pub struct SingularityMachineStateHistoryUpdate {
        message: String = "message",
        object_id: String = "objectId",
        state: MachineState = "state",
        timestamp: i64 = "timestamp",
        user: String = "user",
    }
    list SingularityMachineStateHistoryUpdateList;
}

dto! {
    pub struct SingularityMachineChangeRequest {
        kill_tasks_on_decommission_timeout: bool = "killTasksOnDecommissionTimeout",
        duration_millis: i64 = "durationMillis",
        action_id: String = "actionId",
        message: String = "message",
    }
    list SingularityMachineChangeRequestList;
}

dto! {
    pub struct SingularityRack {
        current_state: SingularityMachineStateHistoryUpdate = "currentState",
        first_seen_at: i64 = "firstSeenAt",
        id: String = "id",
    }
    list SingularityRackList;
}

dto! {
    pub struct SingularitySlave {
        attributes: HashMap<String, String> = "attributes",
        current_state: SingularityMachineStateHistoryUpdate = "currentState",
        first_seen_at: i64 = "firstSeenAt",
        host: String = "host",
        id: String = "id",
        rack_id: String = "rackId",
    }
    list SingularitySlaveList;
}

dto! {
    /// One Singularity scheduler instance and its view of Mesos.
    pub struct SingularityHostState {
        driver_status: String = "driverStatus",
        host_address: String = "hostAddress",
        hostname: String = "hostname",
        master: bool = "master",
        mesos_master: String = "mesosMaster",
        millis_since_last_offer: i64 = "millisSinceLastOffer",
        uptime: i64 = "uptime",
    }
    list SingularityHostStateList;
}

dto! {
    /// Cluster-wide counters returned by the state endpoint.
    ///
    /// Both the `decomissioning*` and `decommissioning*` spellings are sent by
    /// the server and are kept as separate fields.
    pub struct SingularityState {
        active_racks: i32 = "activeRacks",
        active_requests: i32 = "activeRequests",
        active_slaves: i32 = "activeSlaves",
        active_tasks: i32 = "activeTasks",
        all_requests: i32 = "allRequests",
        auth_datastore_healthy: bool = "authDatastoreHealthy",
        cleaning_requests: i32 = "cleaningRequests",
        cleaning_tasks: i32 = "cleaningTasks",
        cooldown_requests: i32 = "cooldownRequests",
        dead_racks: i32 = "deadRacks",
        dead_slaves: i32 = "deadSlaves",
        decomissioning_racks: i32 = "decomissioningRacks",
        decomissioning_slaves: i32 = "decomissioningSlaves",
        decommissioning_racks: i32 = "decommissioningRacks",
        decommissioning_slaves: i32 = "decommissioningSlaves",
        finished_requests: i32 = "finishedRequests",
        future_tasks: i32 = "futureTasks",
        generated_at: i64 = "generatedAt",
        host_states: Vec<SingularityHostState> = "hostStates",
        late_tasks: i32 = "lateTasks",
        lb_cleanup_requests: i32 = "lbCleanupRequests",
        lb_cleanup_tasks: i32 = "lbCleanupTasks",
        max_task_lag: i64 = "maxTaskLag",
        num_deploys: i32 = "numDeploys",
        oldest_deploy: i64 = "oldestDeploy",
        over_provisioned_request_ids: Vec<String> = "overProvisionedRequestIds",
        over_provisioned_requests: i32 = "overProvisionedRequests",
        paused_requests: i32 = "pausedRequests",
        pending_requests: i32 = "pendingRequests",
        scheduled_tasks: i32 = "scheduledTasks",
        under_provisioned_request_ids: Vec<String> = "underProvisionedRequestIds",
        under_provisioned_requests: i32 = "underProvisionedRequests",
        unknown_racks: i32 = "unknownRacks",
        unknown_slaves: i32 = "unknownSlaves",
    }
    list SingularityStateList;
}

impl SingularityState {
    /// The scheduler instance currently acting as leader, if reported.
    pub fn leader(&self) -> Option<&SingularityHostState> {
        self.host_states
            .as_ref()?
            .iter()
            .find(|host| host.master == Some(true))
    }
}
