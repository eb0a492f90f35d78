//! Static operation registry.
//!
//! Two total lookups over the closed operation enumeration:
//!
//! 1. operation type → payload schema, implemented by
//!    [`Payload::decode`](super::payload::Payload::decode);
//! 2. request type → matching confirm/response type, implemented here and
//!    used when synthesizing locally-terminated replies.
//!
//! Both are plain matches; no runtime reflection on generated types.

use crate::proto::OperationType;

/// The confirm (or response) type answering the given request type.
///
/// Returns `None` for operation types that are not requests
/// (notifications, confirms, keep-alive); callers must not expect a reply
/// type for those.
#[must_use]
pub fn confirm_type(request: OperationType) -> Option<OperationType> {
    use OperationType as T;
    match request {
        T::SetAddressRequestType => Some(T::SetAddressConfirmType),
        T::RegisterAppRequestType => Some(T::RegisterAppConfirmType),
        T::StartSessionRequestType => Some(T::StartSessionConfirmType),
        T::CloseSessionRequestType => Some(T::CloseSessionConfirmType),
        T::ListRegisteredAppsRequestType => Some(T::ListRegisteredAppsConfirmType),
        T::DeregisterAppRequestType => Some(T::DeregisterAppConfirmType),
        T::ChangePinRequestType => Some(T::ChangePinConfirmType),
        T::GetRemoteAccessIdRequestType => Some(T::GetRemoteAccessIdConfirmType),
        T::SetRemoteAccessIdRequestType => Some(T::SetRemoteAccessIdConfirmType),
        T::GetSupportIdRequestType => Some(T::GetSupportIdConfirmType),
        T::SetSupportIdRequestType => Some(T::SetSupportIdConfirmType),
        T::GetWebIdRequestType => Some(T::GetWebIdConfirmType),
        T::SetWebIdRequestType => Some(T::SetWebIdConfirmType),
        T::SetPushIdRequestType => Some(T::SetPushIdConfirmType),
        T::DebugRequestType => Some(T::DebugConfirmType),
        T::UpgradeRequestType => Some(T::UpgradeConfirmType),
        T::SetDeviceSettingsRequestType => Some(T::SetDeviceSettingsConfirmType),
        T::VersionRequestType => Some(T::VersionConfirmType),
        T::CnTimeRequestType => Some(T::CnTimeConfirmType),
        // CnRmi is the one request answered by a *Response instead of a
        // *Confirm; the async variant confirms first and responds later.
        T::CnRmiRequestType => Some(T::CnRmiResponseType),
        T::CnRmiAsyncRequestType => Some(T::CnRmiAsyncConfirmType),
        T::CnRpdoRequestType => Some(T::CnRpdoConfirmType),
        T::CnFupReadRegisterRequestType => Some(T::CnFupReadRegisterConfirmType),
        T::CnFupProgramBeginRequestType => Some(T::CnFupProgramBeginConfirmType),
        T::CnFupProgramRequestType => Some(T::CnFupProgramConfirmType),
        T::CnFupProgramEndRequestType => Some(T::CnFupProgramEndConfirmType),
        T::CnFupReadRequestType => Some(T::CnFupReadConfirmType),
        T::CnFupResetRequestType => Some(T::CnFupResetConfirmType),
        _ => None,
    }
}

/// Whether the operation type is a client request expecting a reply.
#[must_use]
pub fn is_request(op_type: OperationType) -> bool {
    confirm_type(op_type).is_some()
}
