//! Tests for work order domain models.

#[cfg(test)]
mod tests {
    use crate::errors::ErrorKind;
    use crate::work_orders::{NewWorkOrder, WorkOrderStatus, WorkOrderType};

    #[test]
    fn test_normalize_applies_open_and_corrective() {
        let mut order = NewWorkOrder::new(1, "Trocar rolete");
        order.normalize();
        assert_eq!(order.status, Some(WorkOrderStatus::Open));
        assert_eq!(order.order_type, Some(WorkOrderType::Corrective));
    }

    #[test]
    fn test_normalize_keeps_explicit_values() {
        let mut order = NewWorkOrder::new(1, "Preventiva mensal")
            .with_type(WorkOrderType::Preventive)
            .with_status(WorkOrderStatus::InProgress);
        order.normalize();
        assert_eq!(order.status, Some(WorkOrderStatus::InProgress));
        assert_eq!(order.order_type, Some(WorkOrderType::Preventive));
    }

    #[test]
    fn test_status_wire_names() {
        let names: Vec<&str> = WorkOrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["open", "in_progress", "done", "canceled"]);
        for status in WorkOrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<WorkOrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_type_wire_names() {
        for order_type in WorkOrderType::ALL {
            let json = serde_json::to_string(&order_type).unwrap();
            assert_eq!(json, format!("\"{}\"", order_type.as_str()));
            assert_eq!(
                order_type.as_str().parse::<WorkOrderType>().unwrap(),
                order_type
            );
        }
    }

    #[test]
    fn test_unknown_status_is_invalid_input() {
        let err = "closed".parse::<WorkOrderStatus>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!("Open".parse::<WorkOrderStatus>().is_err());
    }

    #[test]
    fn test_new_work_order_reads_type_field() {
        let order: NewWorkOrder = serde_json::from_str(
            r#"{"asset_id":1,"type":"corrective","status":"in_progress","title":"Ajuste correia"}"#,
        )
        .unwrap();
        assert_eq!(order.order_type, Some(WorkOrderType::Corrective));
        assert_eq!(order.status, Some(WorkOrderStatus::InProgress));
        assert_eq!(order.description, None);
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let err = NewWorkOrder::new(1, " ").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
