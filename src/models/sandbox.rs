//! Sandbox browsing, archived logs and per-task resource statistics.

use std::collections::HashMap;

dto! {
    pub struct SingularitySandbox {
        current_directory: String = "currentDirectory",
        files: Vec<SingularitySandboxFile> = "files",
        full_path_to_root: String = "fullPathToRoot",
        slave_hostname: String = "slaveHostname",
    }
    list SingularitySandboxList;
}

dto! {
    pub struct SingularitySandboxFile {
        mode: String = "mode",
        mtime: i64 = "mtime",
        name: String = "name",
        size: i64 = "size",
    }
    list SingularitySandboxFileList;
}

dto! {
    /// A task log archived to S3.
    pub struct SingularityS3Log {
        last_modified: i64 = "lastModified",
        size: i64 = "size",
        download_url: String = "downloadUrl",
        get_url: String = "getUrl",
        key: String = "key",
    }
    list SingularityS3LogList;
}

dto! {
    pub struct SingularityS3SearchRequest {
        list_only: bool = "listOnly",
        max_per_page: i32 = "maxPerPage",
        /// Deploy ids to search, keyed by request id.
        requests_and_deploys: HashMap<String, Vec<String>> = "requestsAndDeploys",
        task_ids: Vec<String> = "taskIds",
        start: i64 = "start",
        end: i64 = "end",
        exclude_metadata: bool = "excludeMetadata",
    }
    list SingularityS3SearchRequestList;
}

dto! {
    /// A chunk of a sandbox file read through the Mesos slave.
    pub struct MesosFileChunkObject {
        data: String = "data",
        next_offset: i64 = "nextOffset",
        offset: i64 = "offset",
    }
    list MesosFileChunkObjectList;
}

dto! {
    pub struct MesosTaskStatisticsObject {
        cpus_limit: i32 = "cpusLimit",
        cpus_nr_periods: i64 = "cpusNrPeriods",
        cpus_nr_throttled: i64 = "cpusNrThrottled",
        cpus_system_time_secs: f64 = "cpusSystemTimeSecs",
        cpus_throttled_time_secs: f64 = "cpusThrottledTimeSecs",
        cpus_user_time_secs: f64 = "cpusUserTimeSecs",
        mem_anon_bytes: i64 = "memAnonBytes",
        mem_file_bytes: i64 = "memFileBytes",
        mem_limit_bytes: i64 = "memLimitBytes",
        mem_mapped_file_bytes: i64 = "memMappedFileBytes",
        mem_rss_bytes: i64 = "memRssBytes",
        timestamp: f64 = "timestamp",
    }
    list MesosTaskStatisticsObjectList;
}
