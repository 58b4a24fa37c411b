//! ECS Service listing

use ecsview_client::{ClientError, EcsRepository};
use ecsview_core::dto::service::ServiceListView;

/// List every service in the cluster
pub async fn list_services(
    ecs: &dyn EcsRepository,
    cluster: &str,
) -> Result<ServiceListView, ClientError> {
    let services = ecs.list_services(cluster).await?;

    Ok(ServiceListView {
        cluster: cluster.to_string(),
        services,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeEcs, sample_service};

    #[tokio::test]
    async fn test_list_services() {
        let ecs = FakeEcs::populated();

        let view = list_services(&ecs, "prod").await.unwrap();

        assert_eq!(view.cluster, "prod");
        assert_eq!(view.services, vec![sample_service()]);
    }

    #[tokio::test]
    async fn test_list_services_propagates_api_errors() {
        let ecs = FakeEcs {
            failure: Some("AccessDeniedException".to_string()),
            ..FakeEcs::populated()
        };

        let err = list_services(&ecs, "prod").await.unwrap_err();

        assert!(matches!(err, ClientError::ApiError { service: "ecs", .. }));
    }
}
