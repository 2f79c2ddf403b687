dto_enum! {
    pub enum LoadBalancerRequestType {
        Add = "ADD",
        Remove = "REMOVE",
        Deploy = "DEPLOY",
        Delete = "DELETE",
    }
}

dto_enum! {
    pub enum LoadBalancerMethod {
        PreEnqueue = "PRE_ENQUEUE",
        Enqueue = "ENQUEUE",
        CheckState = "CHECK_STATE",
        Cancel = "CANCEL",
        Delete = "DELETE",
    }
}

dto_enum! {
    /// State of a request as reported by the Baragon load balancer service.
    pub enum BaragonRequestState {
        Unknown = "UNKNOWN",
        Failed = "FAILED",
        Waiting = "WAITING",
        Success = "SUCCESS",
        Canceling = "CANCELING",
        Canceled = "CANCELED",
        InvalidRequestNoop = "INVALID_REQUEST_NOOP",
    }
}

dto! {
    pub struct LoadBalancerRequestId {
        attempt_number: i32 = "attemptNumber",
        id: String = "id",
        request_type: LoadBalancerRequestType = "requestType",
    }
    list LoadBalancerRequestIdList;
}

dto! {
    pub struct SingularityLoadBalancerUpdate {
        load_balancer_request_id: LoadBalancerRequestId = "loadBalancerRequestId",
        load_balancer_state: BaragonRequestState = "loadBalancerState",
        message: String = "message",
        method: LoadBalancerMethod = "method",
        timestamp: i64 = "timestamp",
        uri: String = "uri",
    }
    list SingularityLoadBalancerUpdateList;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        BaragonRequestState, LoadBalancerMethod, SingularityLoadBalancerUpdate,
        SingularityLoadBalancerUpdateList,
    };
    use crate::swagger::{Dto, Fielder, FormatText};

    #[test]
    fn update_list_from_history() {
        let body = json!([
            {
                "loadBalancerRequestId": {
                    "id": "webapp-d1",
                    "requestType": "DEPLOY",
                    "attemptNumber": 1
                },
                "loadBalancerState": "WAITING",
                "method": "ENQUEUE",
                "timestamp": 10
            },
            {"loadBalancerState": "SUCCESS", "method": "CHECK_STATE", "timestamp": 20}
        ]);

        let mut updates = SingularityLoadBalancerUpdateList::default();
        updates.populate(body.to_string().as_bytes()).unwrap();

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].load_balancer_state, Some(BaragonRequestState::Success));
        assert_eq!(
            updates[0].format_text(),
            concat!(
                "SingularityLoadBalancerUpdate{loadBalancerRequestId:",
                r#"{"attemptNumber":1,"id":"webapp-d1","requestType":"DEPLOY"} "#,
                "loadBalancerState:WAITING method:ENQUEUE timestamp:10}",
            )
        );
    }

    #[test]
    fn method_names_parse() {
        assert_eq!(
            "CHECK_STATE".parse::<LoadBalancerMethod>().unwrap(),
            LoadBalancerMethod::CheckState
        );
        assert!("check_state".parse::<LoadBalancerMethod>().is_err());

        let mut update = SingularityLoadBalancerUpdate::default();
        assert!(update.set_field("method", json!("RETRY")).is_err());
        assert!(update.fields_present().is_empty());
    }
}
