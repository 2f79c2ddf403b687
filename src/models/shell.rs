use super::task::SingularityTaskId;

dto_enum! {
    pub enum ShellCommandUpdateType {
        Invalid = "INVALID",
        Acked = "ACKED",
        Started = "STARTED",
        Finished = "FINISHED",
        Failed = "FAILED",
    }
}

dto! {
    /// A named command run inside a task's sandbox by the executor.
    pub struct SingularityShellCommand {
        logfile_name: String = "logfileName",
        name: String = "name",
        options: Vec<String> = "options",
        user: String = "user",
    }
    list SingularityShellCommandList;
}

dto! {
    pub struct SingularityTaskShellCommandRequest {
        shell_command: SingularityShellCommand = "shellCommand",
        task_id: SingularityTaskId = "taskId",
        timestamp: i64 = "timestamp",
        user: String = "user",
    }
    list SingularityTaskShellCommandRequestList;
}

dto! {
    pub struct SingularityTaskShellCommandRequestId {
        id: String = "id",
        name: String = "name",
        task_id: SingularityTaskId = "taskId",
        timestamp: i64 = "timestamp",
    }
    list SingularityTaskShellCommandRequestIdList;
}

dto! {
    pub struct SingularityTaskShellCommandUpdate {
        message: String = "message",
        output_filename: String = "outputFilename",
        shell_request_id: SingularityTaskShellCommandRequestId = "shellRequestId",
        timestamp: i64 = "timestamp",
        update_type: ShellCommandUpdateType = "updateType",
    }
    list SingularityTaskShellCommandUpdateList;
}

dto! {
    pub struct SingularityTaskShellCommandHistory {
        shell_request: SingularityTaskShellCommandRequest = "shellRequest",
        shell_updates: Vec<SingularityTaskShellCommandUpdate> = "shellUpdates",
    }
    list SingularityTaskShellCommandHistoryList;
}

impl SingularityTaskShellCommandHistory {
    /// The most recent update, by timestamp.
    pub fn latest_update(&self) -> Option<&SingularityTaskShellCommandUpdate> {
        self.shell_updates
            .as_ref()?
            .iter()
            .max_by_key(|update| update.timestamp.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        ShellCommandUpdateType, SingularityShellCommand, SingularityTaskShellCommandHistory,
    };
    use crate::swagger::{Dto, Fielder};

    #[test]
    fn latest_update_by_timestamp() {
        let mut history = SingularityTaskShellCommandHistory::default();
        history
            .populate(
                json!({
                    "shellRequest": {"user": "ops", "shellCommand": {"name": "jstack"}},
                    "shellUpdates": [
                        {"updateType": "ACKED", "timestamp": 2},
                        {"updateType": "FINISHED", "timestamp": 9, "outputFilename": "jstack.log"},
                        {"updateType": "STARTED", "timestamp": 5}
                    ]
                })
                .to_string()
                .as_bytes(),
            )
            .unwrap();

        let latest = history.latest_update().unwrap();
        assert_eq!(latest.update_type, Some(ShellCommandUpdateType::Finished));
        assert_eq!(latest.output_filename.as_deref(), Some("jstack.log"));
    }

    #[test]
    fn no_updates_means_no_latest() {
        assert!(SingularityTaskShellCommandHistory::default()
            .latest_update()
            .is_none());
    }

    #[test]
    fn command_options_are_string_lists() {
        let mut command = SingularityShellCommand::default();
        command
            .set_field("Options", json!(["-l", "-F"]))
            .unwrap();
        assert!(command.set_field("options", json!("-l")).is_err());

        assert_eq!(command.get_field("options").unwrap(), json!(["-l", "-F"]));
        command.clear_field("options").unwrap();
        assert!(command.get_field("options").is_err());
    }
}
