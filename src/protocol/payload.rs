//! Tagged payload variant for every operation type.
//!
//! The wire protocol selects the payload schema through the operation-type
//! tag of the envelope. This module enumerates all payload kinds as a closed
//! variant so that dispatch is a static match instead of runtime reflection.
//! Unknown operation types keep their payload as an opaque byte slice; the
//! router treats such messages as unroutable.

use prost::Message as _;

use crate::proto;
use crate::proto::OperationType;

/// Payload of a protocol message, tagged by operation type.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Payload {
    SetAddressRequest(proto::SetAddressRequest),
    RegisterAppRequest(proto::RegisterAppRequest),
    StartSessionRequest(proto::StartSessionRequest),
    CloseSessionRequest(proto::CloseSessionRequest),
    ListRegisteredAppsRequest(proto::ListRegisteredAppsRequest),
    DeregisterAppRequest(proto::DeregisterAppRequest),
    ChangePinRequest(proto::ChangePinRequest),
    GetRemoteAccessIdRequest(proto::GetRemoteAccessIdRequest),
    SetRemoteAccessIdRequest(proto::SetRemoteAccessIdRequest),
    GetSupportIdRequest(proto::GetSupportIdRequest),
    SetSupportIdRequest(proto::SetSupportIdRequest),
    GetWebIdRequest(proto::GetWebIdRequest),
    SetWebIdRequest(proto::SetWebIdRequest),
    SetPushIdRequest(proto::SetPushIdRequest),
    DebugRequest(proto::DebugRequest),
    UpgradeRequest(proto::UpgradeRequest),
    SetDeviceSettingsRequest(proto::SetDeviceSettingsRequest),
    VersionRequest(proto::VersionRequest),
    SetAddressConfirm(proto::SetAddressConfirm),
    RegisterAppConfirm(proto::RegisterAppConfirm),
    StartSessionConfirm(proto::StartSessionConfirm),
    CloseSessionConfirm(proto::CloseSessionConfirm),
    ListRegisteredAppsConfirm(proto::ListRegisteredAppsConfirm),
    DeregisterAppConfirm(proto::DeregisterAppConfirm),
    ChangePinConfirm(proto::ChangePinConfirm),
    GetRemoteAccessIdConfirm(proto::GetRemoteAccessIdConfirm),
    SetRemoteAccessIdConfirm(proto::SetRemoteAccessIdConfirm),
    GetSupportIdConfirm(proto::GetSupportIdConfirm),
    SetSupportIdConfirm(proto::SetSupportIdConfirm),
    GetWebIdConfirm(proto::GetWebIdConfirm),
    SetWebIdConfirm(proto::SetWebIdConfirm),
    SetPushIdConfirm(proto::SetPushIdConfirm),
    DebugConfirm(proto::DebugConfirm),
    UpgradeConfirm(proto::UpgradeConfirm),
    SetDeviceSettingsConfirm(proto::SetDeviceSettingsConfirm),
    VersionConfirm(proto::VersionConfirm),
    GatewayNotification(proto::GatewayNotification),
    KeepAlive(proto::KeepAlive),
    FactoryReset(proto::FactoryReset),
    CnTimeRequest(proto::CnTimeRequest),
    CnTimeConfirm(proto::CnTimeConfirm),
    CnNodeRequest(proto::CnNodeRequest),
    CnNodeNotification(proto::CnNodeNotification),
    CnRmiRequest(proto::CnRmiRequest),
    CnRmiResponse(proto::CnRmiResponse),
    CnRmiAsyncRequest(proto::CnRmiAsyncRequest),
    CnRmiAsyncConfirm(proto::CnRmiAsyncConfirm),
    CnRmiAsyncResponse(proto::CnRmiAsyncResponse),
    CnRpdoRequest(proto::CnRpdoRequest),
    CnRpdoConfirm(proto::CnRpdoConfirm),
    CnRpdoNotification(proto::CnRpdoNotification),
    CnAlarmNotification(proto::CnAlarmNotification),
    CnFupReadRegisterRequest(proto::CnFupReadRegisterRequest),
    CnFupReadRegisterConfirm(proto::CnFupReadRegisterConfirm),
    CnFupProgramBeginRequest(proto::CnFupProgramBeginRequest),
    CnFupProgramBeginConfirm(proto::CnFupProgramBeginConfirm),
    CnFupProgramRequest(proto::CnFupProgramRequest),
    CnFupProgramConfirm(proto::CnFupProgramConfirm),
    CnFupProgramEndRequest(proto::CnFupProgramEndRequest),
    CnFupProgramEndConfirm(proto::CnFupProgramEndConfirm),
    CnFupReadRequest(proto::CnFupReadRequest),
    CnFupReadConfirm(proto::CnFupReadConfirm),
    CnFupResetRequest(proto::CnFupResetRequest),
    CnFupResetConfirm(proto::CnFupResetConfirm),
    /// Payload of an operation type outside the closed enumeration. Kept
    /// verbatim; never re-interpreted.
    Opaque(Vec<u8>),
}

impl Payload {
    /// Decode the payload bytes for a known operation type.
    ///
    /// An empty byte slice is legal for every type and yields the message's
    /// default value, matching protobuf semantics.
    ///
    /// # Errors
    ///
    /// Returns `prost::DecodeError` when the bytes do not parse as the schema
    /// selected by `op_type`.
    pub fn decode(op_type: OperationType, buf: &[u8]) -> Result<Self, prost::DecodeError> {
        use OperationType as T;
        Ok(match op_type {
            T::NoOperation => Self::Opaque(buf.to_vec()),
            T::SetAddressRequestType => Self::SetAddressRequest(proto::SetAddressRequest::decode(buf)?),
            T::RegisterAppRequestType => Self::RegisterAppRequest(proto::RegisterAppRequest::decode(buf)?),
            T::StartSessionRequestType => Self::StartSessionRequest(proto::StartSessionRequest::decode(buf)?),
            T::CloseSessionRequestType => Self::CloseSessionRequest(proto::CloseSessionRequest::decode(buf)?),
            T::ListRegisteredAppsRequestType => Self::ListRegisteredAppsRequest(proto::ListRegisteredAppsRequest::decode(buf)?),
            T::DeregisterAppRequestType => Self::DeregisterAppRequest(proto::DeregisterAppRequest::decode(buf)?),
            T::ChangePinRequestType => Self::ChangePinRequest(proto::ChangePinRequest::decode(buf)?),
            T::GetRemoteAccessIdRequestType => Self::GetRemoteAccessIdRequest(proto::GetRemoteAccessIdRequest::decode(buf)?),
            T::SetRemoteAccessIdRequestType => Self::SetRemoteAccessIdRequest(proto::SetRemoteAccessIdRequest::decode(buf)?),
            T::GetSupportIdRequestType => Self::GetSupportIdRequest(proto::GetSupportIdRequest::decode(buf)?),
            T::SetSupportIdRequestType => Self::SetSupportIdRequest(proto::SetSupportIdRequest::decode(buf)?),
            T::GetWebIdRequestType => Self::GetWebIdRequest(proto::GetWebIdRequest::decode(buf)?),
            T::SetWebIdRequestType => Self::SetWebIdRequest(proto::SetWebIdRequest::decode(buf)?),
            T::SetPushIdRequestType => Self::SetPushIdRequest(proto::SetPushIdRequest::decode(buf)?),
            T::DebugRequestType => Self::DebugRequest(proto::DebugRequest::decode(buf)?),
            T::UpgradeRequestType => Self::UpgradeRequest(proto::UpgradeRequest::decode(buf)?),
            T::SetDeviceSettingsRequestType => Self::SetDeviceSettingsRequest(proto::SetDeviceSettingsRequest::decode(buf)?),
            T::VersionRequestType => Self::VersionRequest(proto::VersionRequest::decode(buf)?),
            T::SetAddressConfirmType => Self::SetAddressConfirm(proto::SetAddressConfirm::decode(buf)?),
            T::RegisterAppConfirmType => Self::RegisterAppConfirm(proto::RegisterAppConfirm::decode(buf)?),
            T::StartSessionConfirmType => Self::StartSessionConfirm(proto::StartSessionConfirm::decode(buf)?),
            T::CloseSessionConfirmType => Self::CloseSessionConfirm(proto::CloseSessionConfirm::decode(buf)?),
            T::ListRegisteredAppsConfirmType => Self::ListRegisteredAppsConfirm(proto::ListRegisteredAppsConfirm::decode(buf)?),
            T::DeregisterAppConfirmType => Self::DeregisterAppConfirm(proto::DeregisterAppConfirm::decode(buf)?),
            T::ChangePinConfirmType => Self::ChangePinConfirm(proto::ChangePinConfirm::decode(buf)?),
            T::GetRemoteAccessIdConfirmType => Self::GetRemoteAccessIdConfirm(proto::GetRemoteAccessIdConfirm::decode(buf)?),
            T::SetRemoteAccessIdConfirmType => Self::SetRemoteAccessIdConfirm(proto::SetRemoteAccessIdConfirm::decode(buf)?),
            T::GetSupportIdConfirmType => Self::GetSupportIdConfirm(proto::GetSupportIdConfirm::decode(buf)?),
            T::SetSupportIdConfirmType => Self::SetSupportIdConfirm(proto::SetSupportIdConfirm::decode(buf)?),
            T::GetWebIdConfirmType => Self::GetWebIdConfirm(proto::GetWebIdConfirm::decode(buf)?),
            T::SetWebIdConfirmType => Self::SetWebIdConfirm(proto::SetWebIdConfirm::decode(buf)?),
            T::SetPushIdConfirmType => Self::SetPushIdConfirm(proto::SetPushIdConfirm::decode(buf)?),
            T::DebugConfirmType => Self::DebugConfirm(proto::DebugConfirm::decode(buf)?),
            T::UpgradeConfirmType => Self::UpgradeConfirm(proto::UpgradeConfirm::decode(buf)?),
            T::SetDeviceSettingsConfirmType => Self::SetDeviceSettingsConfirm(proto::SetDeviceSettingsConfirm::decode(buf)?),
            T::VersionConfirmType => Self::VersionConfirm(proto::VersionConfirm::decode(buf)?),
            T::GatewayNotificationType => Self::GatewayNotification(proto::GatewayNotification::decode(buf)?),
            T::KeepAliveType => Self::KeepAlive(proto::KeepAlive::decode(buf)?),
            T::FactoryResetType => Self::FactoryReset(proto::FactoryReset::decode(buf)?),
            T::CnTimeRequestType => Self::CnTimeRequest(proto::CnTimeRequest::decode(buf)?),
            T::CnTimeConfirmType => Self::CnTimeConfirm(proto::CnTimeConfirm::decode(buf)?),
            T::CnNodeRequestType => Self::CnNodeRequest(proto::CnNodeRequest::decode(buf)?),
            T::CnNodeNotificationType => Self::CnNodeNotification(proto::CnNodeNotification::decode(buf)?),
            T::CnRmiRequestType => Self::CnRmiRequest(proto::CnRmiRequest::decode(buf)?),
            T::CnRmiResponseType => Self::CnRmiResponse(proto::CnRmiResponse::decode(buf)?),
            T::CnRmiAsyncRequestType => Self::CnRmiAsyncRequest(proto::CnRmiAsyncRequest::decode(buf)?),
            T::CnRmiAsyncConfirmType => Self::CnRmiAsyncConfirm(proto::CnRmiAsyncConfirm::decode(buf)?),
            T::CnRmiAsyncResponseType => Self::CnRmiAsyncResponse(proto::CnRmiAsyncResponse::decode(buf)?),
            T::CnRpdoRequestType => Self::CnRpdoRequest(proto::CnRpdoRequest::decode(buf)?),
            T::CnRpdoConfirmType => Self::CnRpdoConfirm(proto::CnRpdoConfirm::decode(buf)?),
            T::CnRpdoNotificationType => Self::CnRpdoNotification(proto::CnRpdoNotification::decode(buf)?),
            T::CnAlarmNotificationType => Self::CnAlarmNotification(proto::CnAlarmNotification::decode(buf)?),
            T::CnFupReadRegisterRequestType => Self::CnFupReadRegisterRequest(proto::CnFupReadRegisterRequest::decode(buf)?),
            T::CnFupReadRegisterConfirmType => Self::CnFupReadRegisterConfirm(proto::CnFupReadRegisterConfirm::decode(buf)?),
            T::CnFupProgramBeginRequestType => Self::CnFupProgramBeginRequest(proto::CnFupProgramBeginRequest::decode(buf)?),
            T::CnFupProgramBeginConfirmType => Self::CnFupProgramBeginConfirm(proto::CnFupProgramBeginConfirm::decode(buf)?),
            T::CnFupProgramRequestType => Self::CnFupProgramRequest(proto::CnFupProgramRequest::decode(buf)?),
            T::CnFupProgramConfirmType => Self::CnFupProgramConfirm(proto::CnFupProgramConfirm::decode(buf)?),
            T::CnFupProgramEndRequestType => Self::CnFupProgramEndRequest(proto::CnFupProgramEndRequest::decode(buf)?),
            T::CnFupProgramEndConfirmType => Self::CnFupProgramEndConfirm(proto::CnFupProgramEndConfirm::decode(buf)?),
            T::CnFupReadRequestType => Self::CnFupReadRequest(proto::CnFupReadRequest::decode(buf)?),
            T::CnFupReadConfirmType => Self::CnFupReadConfirm(proto::CnFupReadConfirm::decode(buf)?),
            T::CnFupResetRequestType => Self::CnFupResetRequest(proto::CnFupResetRequest::decode(buf)?),
            T::CnFupResetConfirmType => Self::CnFupResetConfirm(proto::CnFupResetConfirm::decode(buf)?),
        })
    }

    /// Serialize the payload to its wire representation.
    #[must_use]
    pub fn encode_to_vec(&self) -> Vec<u8> {
        match self {
            Self::SetAddressRequest(m) => m.encode_to_vec(),
            Self::RegisterAppRequest(m) => m.encode_to_vec(),
            Self::StartSessionRequest(m) => m.encode_to_vec(),
            Self::CloseSessionRequest(m) => m.encode_to_vec(),
            Self::ListRegisteredAppsRequest(m) => m.encode_to_vec(),
            Self::DeregisterAppRequest(m) => m.encode_to_vec(),
            Self::ChangePinRequest(m) => m.encode_to_vec(),
            Self::GetRemoteAccessIdRequest(m) => m.encode_to_vec(),
            Self::SetRemoteAccessIdRequest(m) => m.encode_to_vec(),
            Self::GetSupportIdRequest(m) => m.encode_to_vec(),
            Self::SetSupportIdRequest(m) => m.encode_to_vec(),
            Self::GetWebIdRequest(m) => m.encode_to_vec(),
            Self::SetWebIdRequest(m) => m.encode_to_vec(),
            Self::SetPushIdRequest(m) => m.encode_to_vec(),
            Self::DebugRequest(m) => m.encode_to_vec(),
            Self::UpgradeRequest(m) => m.encode_to_vec(),
            Self::SetDeviceSettingsRequest(m) => m.encode_to_vec(),
            Self::VersionRequest(m) => m.encode_to_vec(),
            Self::SetAddressConfirm(m) => m.encode_to_vec(),
            Self::RegisterAppConfirm(m) => m.encode_to_vec(),
            Self::StartSessionConfirm(m) => m.encode_to_vec(),
            Self::CloseSessionConfirm(m) => m.encode_to_vec(),
            Self::ListRegisteredAppsConfirm(m) => m.encode_to_vec(),
            Self::DeregisterAppConfirm(m) => m.encode_to_vec(),
            Self::ChangePinConfirm(m) => m.encode_to_vec(),
            Self::GetRemoteAccessIdConfirm(m) => m.encode_to_vec(),
            Self::SetRemoteAccessIdConfirm(m) => m.encode_to_vec(),
            Self::GetSupportIdConfirm(m) => m.encode_to_vec(),
            Self::SetSupportIdConfirm(m) => m.encode_to_vec(),
            Self::GetWebIdConfirm(m) => m.encode_to_vec(),
            Self::SetWebIdConfirm(m) => m.encode_to_vec(),
            Self::SetPushIdConfirm(m) => m.encode_to_vec(),
            Self::DebugConfirm(m) => m.encode_to_vec(),
            Self::UpgradeConfirm(m) => m.encode_to_vec(),
            Self::SetDeviceSettingsConfirm(m) => m.encode_to_vec(),
            Self::VersionConfirm(m) => m.encode_to_vec(),
            Self::GatewayNotification(m) => m.encode_to_vec(),
            Self::KeepAlive(m) => m.encode_to_vec(),
            Self::FactoryReset(m) => m.encode_to_vec(),
            Self::CnTimeRequest(m) => m.encode_to_vec(),
            Self::CnTimeConfirm(m) => m.encode_to_vec(),
            Self::CnNodeRequest(m) => m.encode_to_vec(),
            Self::CnNodeNotification(m) => m.encode_to_vec(),
            Self::CnRmiRequest(m) => m.encode_to_vec(),
            Self::CnRmiResponse(m) => m.encode_to_vec(),
            Self::CnRmiAsyncRequest(m) => m.encode_to_vec(),
            Self::CnRmiAsyncConfirm(m) => m.encode_to_vec(),
            Self::CnRmiAsyncResponse(m) => m.encode_to_vec(),
            Self::CnRpdoRequest(m) => m.encode_to_vec(),
            Self::CnRpdoConfirm(m) => m.encode_to_vec(),
            Self::CnRpdoNotification(m) => m.encode_to_vec(),
            Self::CnAlarmNotification(m) => m.encode_to_vec(),
            Self::CnFupReadRegisterRequest(m) => m.encode_to_vec(),
            Self::CnFupReadRegisterConfirm(m) => m.encode_to_vec(),
            Self::CnFupProgramBeginRequest(m) => m.encode_to_vec(),
            Self::CnFupProgramBeginConfirm(m) => m.encode_to_vec(),
            Self::CnFupProgramRequest(m) => m.encode_to_vec(),
            Self::CnFupProgramConfirm(m) => m.encode_to_vec(),
            Self::CnFupProgramEndRequest(m) => m.encode_to_vec(),
            Self::CnFupProgramEndConfirm(m) => m.encode_to_vec(),
            Self::CnFupReadRequest(m) => m.encode_to_vec(),
            Self::CnFupReadConfirm(m) => m.encode_to_vec(),
            Self::CnFupResetRequest(m) => m.encode_to_vec(),
            Self::CnFupResetConfirm(m) => m.encode_to_vec(),
            Self::Opaque(bytes) => bytes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_payload_is_legal() {
        let payload = Payload::decode(OperationType::StartSessionRequestType, &[]).unwrap();
        assert_eq!(
            payload,
            Payload::StartSessionRequest(proto::StartSessionRequest::default())
        );
    }

    #[test]
    fn test_decode_register_request_roundtrip() {
        let original = proto::RegisterAppRequest {
            uuid: Some(vec![0xAA; 16]),
            pin: Some(4321),
            devicename: Some("test".into()),
        };
        let bytes = original.encode_to_vec();
        let decoded = Payload::decode(OperationType::RegisterAppRequestType, &bytes).unwrap();
        assert_eq!(decoded, Payload::RegisterAppRequest(original));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        // 0xFF is a truncated varint key
        let result = Payload::decode(OperationType::CnRpdoNotificationType, &[0xFF]);
        assert!(result.is_err());
    }

    #[test]
    fn test_opaque_encodes_verbatim() {
        let payload = Payload::Opaque(vec![1, 2, 3]);
        assert_eq!(payload.encode_to_vec(), vec![1, 2, 3]);
    }
}
