dto_enum! {
    pub enum WebhookType {
        Task = "TASK",
        Request = "REQUEST",
        Deploy = "DEPLOY",
    }
}

dto! {
    /// An endpoint notified on task, request or deploy changes.
    pub struct SingularityWebhook {
        id: String = "id",
        timestamp: i64 = "timestamp",
        r#type: WebhookType = "type",
        uri: String = "uri",
        user: String = "user",
    }
    list SingularityWebhookList;
}

dto! {
    pub struct SingularityWebhookSummary {
        queue_size: i32 = "queueSize",
        webhook: SingularityWebhook = "webhook",
    }
    list SingularityWebhookSummaryList;
}
