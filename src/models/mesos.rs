//! Mirrors of the Mesos protocol messages that Singularity embeds in its own
//! responses (offers and launched task infos).

use super::container::DockerNetworkType;

dto_enum! {
    pub enum ContainerInfoType {
        Docker = "DOCKER",
        Mesos = "MESOS",
    }
}

dto_enum! {
    pub enum DiscoveryVisibility {
        Framework = "FRAMEWORK",
        Cluster = "CLUSTER",
        External = "EXTERNAL",
    }
}

dto_enum! {
    pub enum ImageType {
        Appc = "APPC",
        Docker = "DOCKER",
    }
}

dto! {
    pub struct FrameworkId {
        value: String = "value",
    }
    list FrameworkIdList;
}

dto! {
    pub struct ExecutorId {
        value: String = "value",
    }
    list ExecutorIdList;
}

dto! {
    pub struct OfferId {
        value: String = "value",
    }
    list OfferIdList;
}

dto! {
    pub struct SlaveId {
        value: String = "value",
    }
    list SlaveIdList;
}

dto! {
    pub struct TaskId {
        value: String = "value",
    }
    list TaskIdList;
}

dto! {
    pub struct Address {
        hostname: String = "hostname",
        ip: String = "ip",
        port: i32 = "port",
    }
    list AddressList;
}

dto! {
    pub struct Url {
        address: Address = "address",
        fragment: String = "fragment",
        path: String = "path",
        query_count: i32 = "queryCount",
        scheme: String = "scheme",
    }
    list UrlList;
}

dto! {
    pub struct TimeInfo {
        nanoseconds: i64 = "nanoseconds",
    }
    list TimeInfoList;
}

dto! {
    pub struct DurationInfo {
        nanoseconds: i64 = "nanoseconds",
    }
    list DurationInfoList;
}

dto! {
    /// A window during which the offering agent will be down for maintenance.
    pub struct Unavailability {
        duration: DurationInfo = "duration",
        start: TimeInfo = "start",
    }
    list UnavailabilityList;
}

dto! {
    pub struct Label {
        key: String = "key",
        value: String = "value",
    }
    list LabelList;
}

dto! {
    pub struct Labels {
        labels: Vec<Label> = "labels",
        labels_count: i32 = "labelsCount",
    }
    list LabelsList;
}

dto! {
    pub struct Variable {
        name: String = "name",
        value: String = "value",
    }
    list VariableList;
}

dto! {
    pub struct Environment {
        variables: Vec<Variable> = "variables",
        variables_count: i32 = "variablesCount",
        variables_list: Vec<Variable> = "variablesList",
    }
    list EnvironmentList;
}

dto! {
    pub struct Credential {
        principal: String = "principal",
        secret: String = "secret",
    }
    list CredentialList;
}

dto! {
    pub struct Appc {
        id: String = "id",
        labels: Labels = "labels",
        name: String = "name",
    }
    list AppcList;
}

dto! {
    /// A Docker image reference for the Mesos containerizer.
    pub struct Docker {
        credential: Credential = "credential",
        name: String = "name",
    }
    list DockerList;
}

dto! {
    pub struct Image {
        appc: Appc = "appc",
        docker: Docker = "docker",
        r#type: ImageType = "type",
    }
    list ImageList;
}

dto! {
    pub struct MesosInfo {
        image: Image = "image",
    }
    list MesosInfoList;
}

dto! {
    pub struct DockerInfo {
        force_pull_image: bool = "forcePullImage",
        image: String = "image",
        network: DockerNetworkType = "network",
        parameters_count: i32 = "parametersCount",
        port_mappings_count: i32 = "portMappingsCount",
        privileged: bool = "privileged",
    }
    list DockerInfoList;
}

dto! {
    pub struct ContainerInfo {
        docker: DockerInfo = "docker",
        hostname: String = "hostname",
        mesos: MesosInfo = "mesos",
        r#type: ContainerInfoType = "type",
        volumes_count: i32 = "volumesCount",
    }
    list ContainerInfoList;
}

dto! {
    pub struct CommandInfo {
        arguments_count: i32 = "argumentsCount",
        arguments_list: Vec<String> = "argumentsList",
        container: ContainerInfo = "container",
        environment: Environment = "environment",
        shell: bool = "shell",
        uris_count: i32 = "urisCount",
        user: String = "user",
        value: String = "value",
    }
    list CommandInfoList;
}

dto! {
    pub struct Port {
        name: String = "name",
        number: i32 = "number",
        protocol: String = "protocol",
    }
    list PortList;
}

dto! {
    pub struct Ports {
        ports: Vec<Port> = "ports",
        ports_count: i32 = "portsCount",
    }
    list PortsList;
}

dto! {
    pub struct DiscoveryInfo {
        environment: String = "environment",
        labels: Labels = "labels",
        location: String = "location",
        name: String = "name",
        ports: Ports = "ports",
        version: String = "version",
        visibility: DiscoveryVisibility = "visibility",
    }
    list DiscoveryInfoList;
}

dto! {
    pub struct Http {
        path: String = "path",
        port: i32 = "port",
        statuses_count: i32 = "statusesCount",
        statuses_list: Vec<i32> = "statusesList",
    }
    list HttpList;
}

dto! {
    pub struct HealthCheck {
        command: CommandInfo = "command",
        consecutive_failures: i32 = "consecutiveFailures",
        delay_seconds: f64 = "delaySeconds",
        grace_period_seconds: f64 = "gracePeriodSeconds",
        http: Http = "http",
        interval_seconds: f64 = "intervalSeconds",
        timeout_seconds: f64 = "timeoutSeconds",
    }
    list HealthCheckList;
}

dto! {
    pub struct ExecutorInfo {
        command: CommandInfo = "command",
        container: ContainerInfo = "container",
        discovery: DiscoveryInfo = "discovery",
        executor_id: ExecutorId = "executorId",
        framework_id: FrameworkId = "frameworkId",
        name: String = "name",
        resources_count: i32 = "resourcesCount",
        source: String = "source",
    }
    list ExecutorInfoList;
}

dto! {
    /// Resources on one agent offered to the framework.
    pub struct Offer {
        attributes_count: i32 = "attributesCount",
        executor_ids_count: i32 = "executorIdsCount",
        executor_ids_list: Vec<ExecutorId> = "executorIdsList",
        framework_id: FrameworkId = "frameworkId",
        hostname: String = "hostname",
        id: OfferId = "id",
        resources_count: i32 = "resourcesCount",
        slave_id: SlaveId = "slaveId",
        unavailability: Unavailability = "unavailability",
        url: Url = "url",
    }
    list OfferList;
}

dto! {
    /// The task description handed to Mesos at launch.
    pub struct TaskInfo {
        command: CommandInfo = "command",
        container: ContainerInfo = "container",
        discovery: DiscoveryInfo = "discovery",
        executor: ExecutorInfo = "executor",
        health_check: HealthCheck = "healthCheck",
        labels: Labels = "labels",
        name: String = "name",
        resources_count: i32 = "resourcesCount",
        slave_id: SlaveId = "slaveId",
        task_id: TaskId = "taskId",
    }
    list TaskInfoList;
}
