//! Envelope dispatch over full documents.

use cas_protocol::{
    AuthenticationFailure, CasError, ProxyFailure, ProxySuccess, ServiceResponse,
};

use crate::fixtures::CANONICAL_FAILURE;

#[test]
fn failure_envelope_decodes_and_re_encodes() {
    let response = ServiceResponse::from_xml_str(CANONICAL_FAILURE).unwrap();
    assert!(!response.is_success());
    assert_eq!(
        response,
        ServiceResponse::AuthenticationFailure(AuthenticationFailure::new(
            "INVALID_TICKET",
            "Ticket ST-1856339 not recognized",
        ))
    );
    assert_eq!(response.to_xml_string().unwrap(), CANONICAL_FAILURE);
}

#[test]
fn proxy_success_envelope_decodes() {
    let response = ServiceResponse::from_xml_str(
        r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas">
             <cas:proxySuccess>
               <cas:proxyTicket>PT-1856392-b98xZrQN4p90ASrw96c8</cas:proxyTicket>
             </cas:proxySuccess>
           </cas:serviceResponse>"#,
    )
    .unwrap();
    assert!(response.is_success());
    assert_eq!(
        response,
        ServiceResponse::ProxySuccess(ProxySuccess::new("PT-1856392-b98xZrQN4p90ASrw96c8"))
    );
}

#[test]
fn proxy_failure_envelope_decodes() {
    let response = ServiceResponse::from_xml_str(
        r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas">
             <cas:proxyFailure code="INVALID_REQUEST">pgt and targetService are required</cas:proxyFailure>
           </cas:serviceResponse>"#,
    )
    .unwrap();
    assert_eq!(
        response,
        ServiceResponse::ProxyFailure(ProxyFailure::new(
            "INVALID_REQUEST",
            "pgt and targetService are required",
        ))
    );
}

#[test]
fn empty_envelope_is_missing_a_variant() {
    let result = ServiceResponse::from_xml_str(
        r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas"/>"#,
    );
    assert!(matches!(result, Err(CasError::MissingResponse)));
}

#[test]
fn foreign_namespace_variant_lookalike_does_not_dispatch() {
    let result = ServiceResponse::from_xml_str(
        r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas" xmlns:slate="http://technolutions.com/slate">
             <slate:authenticationSuccess/>
           </cas:serviceResponse>"#,
    );
    assert!(matches!(result, Err(CasError::MissingResponse)));
}

#[test]
fn malformed_document_surfaces_as_xml_error() {
    let result = ServiceResponse::from_xml_str("<cas:serviceResponse>");
    assert!(matches!(result, Err(CasError::Xml(_))));
}

#[test]
fn decode_errors_map_to_protocol_failure_responses() {
    let error = ServiceResponse::from_xml_str(
        r#"<cas:serviceResponse xmlns:cas="http://www.yale.edu/tp/cas"/>"#,
    )
    .unwrap_err();

    let failure = AuthenticationFailure::from_error(&error);
    assert_eq!(failure.code, "INVALID_REQUEST");

    let wrapped = ServiceResponse::AuthenticationFailure(failure);
    let xml = wrapped.to_xml_string().unwrap();
    assert!(xml.contains("code=\"INVALID_REQUEST\""));
}
