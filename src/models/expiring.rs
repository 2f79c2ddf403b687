//! Actions that revert on their own once their duration runs out.

use super::machine::MachineState;

dto! {
    pub struct SingularityExpiringBounce {
        action_id: String = "actionId",
        deploy_id: String = "deployId",
        request_id: String = "requestId",
        start_millis: i64 = "startMillis",
        user: String = "user",
    }
    list SingularityExpiringBounceList;
}

dto! {
    pub struct SingularityExpiringMachineState {
        kill_tasks_on_decommission_timeout: bool = "killTasksOnDecommissionTimeout",
        start_millis: i64 = "startMillis",
        action_id: String = "actionId",
        user: String = "user",
        machine_id: String = "machineId",
        revert_to_state: MachineState = "revertToState",
    }
    list SingularityExpiringMachineStateList;
}

dto! {
    pub struct SingularityExpiringPause {
        action_id: String = "actionId",
        request_id: String = "requestId",
        start_millis: i64 = "startMillis",
        user: String = "user",
    }
    list SingularityExpiringPauseList;
}

dto! {
    pub struct SingularityExpiringScale {
        action_id: String = "actionId",
        request_id: String = "requestId",
        revert_to_instances: i32 = "revertToInstances",
        start_millis: i64 = "startMillis",
        user: String = "user",
    }
    list SingularityExpiringScaleList;
}

dto! {
    pub struct SingularityExpiringSkipHealthchecks {
        action_id: String = "actionId",
        request_id: String = "requestId",
        revert_to_skip_healthchecks: bool = "revertToSkipHealthchecks",
        start_millis: i64 = "startMillis",
        user: String = "user",
    }
    list SingularityExpiringSkipHealthchecksList;
}
