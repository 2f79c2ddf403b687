use std::collections::HashMap;

dto! {
    /// An artifact shipped inline with the deploy.
    pub struct EmbeddedArtifact {
        content: Vec<String> = "content",
        filename: String = "filename",
        md5sum: String = "md5sum",
        name: String = "name",
        target_folder_relative_to_task: String = "targetFolderRelativeToTask",
    }
    list EmbeddedArtifactList;
}

dto! {
    /// An artifact downloaded from a URL.
    pub struct ExternalArtifact {
        filename: String = "filename",
        filesize: i64 = "filesize",
        md5sum: String = "md5sum",
        name: String = "name",
        target_folder_relative_to_task: String = "targetFolderRelativeToTask",
        url: String = "url",
    }
    list ExternalArtifactList;
}

dto! {
    /// An artifact downloaded from S3.
    pub struct S3Artifact {
        filename: String = "filename",
        filesize: i64 = "filesize",
        md5sum: String = "md5sum",
        name: String = "name",
        s3_bucket: String = "s3Bucket",
        s3_object_key: String = "s3ObjectKey",
        target_folder_relative_to_task: String = "targetFolderRelativeToTask",
    }
    list S3ArtifactList;
}

dto! {
    /// Signature of an S3 artifact, checked before the artifact is used.
    pub struct S3ArtifactSignature {
        artifact_filename: String = "artifactFilename",
        filename: String = "filename",
        filesize: i64 = "filesize",
        md5sum: String = "md5sum",
        name: String = "name",
        s3_bucket: String = "s3Bucket",
        s3_object_key: String = "s3ObjectKey",
        target_folder_relative_to_task: String = "targetFolderRelativeToTask",
    }
    list S3ArtifactSignatureList;
}

dto! {
    /// Settings for the custom Singularity executor.
    pub struct ExecutorData {
        cmd: String = "cmd",
        embedded_artifacts: Vec<EmbeddedArtifact> = "embeddedArtifacts",
        external_artifacts: Vec<ExternalArtifact> = "externalArtifacts",
        extra_cmd_line_args: Vec<String> = "extraCmdLineArgs",
        logging_extra_fields: HashMap<String, String> = "loggingExtraFields",
        logging_s3_bucket: String = "loggingS3Bucket",
        logging_tag: String = "loggingTag",
        max_open_files: i32 = "maxOpenFiles",
        max_task_threads: i32 = "maxTaskThreads",
        preserve_task_sandbox_after_finish: bool = "preserveTaskSandboxAfterFinish",
        running_sentinel: String = "runningSentinel",
        s3_artifact_signatures: Vec<S3ArtifactSignature> = "s3ArtifactSignatures",
        s3_artifacts: Vec<S3Artifact> = "s3Artifacts",
        sig_kill_processes_after_millis: i64 = "sigKillProcessesAfterMillis",
        skip_logrotate_and_compress: bool = "skipLogrotateAndCompress",
        successful_exit_codes: Vec<i32> = "successfulExitCodes",
        user: String = "user",
    }
    list ExecutorDataList;
}
