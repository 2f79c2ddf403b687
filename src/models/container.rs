use std::collections::HashMap;

dto_enum! {
    pub enum ContainerType {
        Mesos = "MESOS",
        Docker = "DOCKER",
    }
}

dto_enum! {
    pub enum DockerNetworkType {
        Host = "HOST",
        Bridge = "BRIDGE",
        None = "NONE",
    }
}

dto_enum! {
    /// Whether a port number is used as given or taken from the offer's port
    /// resources by index.
    pub enum PortMappingType {
        Literal = "LITERAL",
        FromOffer = "FROM_OFFER",
    }
}

dto_enum! {
    pub enum DockerVolumeMode {
        Ro = "RO",
        Rw = "RW",
    }
}

dto_enum! {
    pub enum HealthcheckProtocol {
        Http = "http",
        Https = "https",
    }
}

dto! {
    pub struct SingularityContainerInfo {
        docker: SingularityDockerInfo = "docker",
        r#type: ContainerType = "type",
        volumes: Vec<SingularityVolume> = "volumes",
    }
    list SingularityContainerInfoList;
}

dto! {
    pub struct SingularityDockerInfo {
        force_pull_image: bool = "forcePullImage",
        image: String = "image",
        network: DockerNetworkType = "network",
        parameters: HashMap<String, String> = "parameters",
        port_mappings: Vec<SingularityDockerPortMapping> = "portMappings",
        privileged: bool = "privileged",
    }
    list SingularityDockerInfoList;
}

dto! {
    pub struct SingularityDockerParameter {
        key: String = "key",
        value: String = "value",
    }
    list SingularityDockerParameterList;
}

dto! {
    pub struct SingularityDockerPortMapping {
        container_port: i32 = "containerPort",
        container_port_type: PortMappingType = "containerPortType",
        host_port: i32 = "hostPort",
        host_port_type: PortMappingType = "hostPortType",
        protocol: String = "protocol",
    }
    list SingularityDockerPortMappingList;
}

dto! {
    pub struct SingularityVolume {
        container_path: String = "containerPath",
        host_path: String = "hostPath",
        mode: DockerVolumeMode = "mode",
    }
    list SingularityVolumeList;
}

dto! {
    pub struct SingularityMesosArtifact {
        uri: String = "uri",
        cache: bool = "cache",
        executable: bool = "executable",
        extract: bool = "extract",
    }
    list SingularityMesosArtifactList;
}

dto! {
    pub struct SingularityMesosTaskLabel {
        key: String = "key",
        value: String = "value",
    }
    list SingularityMesosTaskLabelList;
}

dto! {
    /// Resources requested per task.
    pub struct Resources {
        cpus: f64 = "cpus",
        memory_mb: f64 = "memoryMb",
        num_ports: i32 = "numPorts",
    }
    list ResourcesList;
}

dto! {
    pub struct HealthcheckOptions {
        port_number: i64 = "portNumber",
        startup_timeout_seconds: i32 = "startupTimeoutSeconds",
        interval_seconds: i32 = "intervalSeconds",
        failure_status_codes: Vec<i32> = "failureStatusCodes",
        max_retries: i32 = "maxRetries",
        uri: String = "uri",
        port_index: i32 = "portIndex",
        protocol: HealthcheckProtocol = "protocol",
        startup_delay_seconds: i32 = "startupDelaySeconds",
        startup_interval_seconds: i32 = "startupIntervalSeconds",
        response_timeout_seconds: i32 = "responseTimeoutSeconds",
    }
    list HealthcheckOptionsList;
}
