/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SigV4Signer, SignableBody, SigningError,
    SigningRequirements,
};
use aws_types::region::SigningRegion;
use aws_types::{Credentials, SigningService};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `glacier`
/// - [`Credentials`](Credentials): The credentials resolved when the client config was built
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration, eg.
///   whether `x-amz-content-sha256` is sent.
/// If any of these fields are missing, the middleware will return an error.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials in the property bag")]
    MissingCredentials,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("The request body could not be signed by this configuration")]
    InvalidBodyType,
    #[error("Signing failed")]
    SigningFailure(#[from] SigningError),
}

/// Extract a signing config from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
///
/// Returns `Ok(None)` when the request should go out unsigned.
fn signing_config(
    config: &PropertyBag,
) -> Result<Option<(&OperationSigningConfig, RequestConfig<'_>, &Credentials)>, SigningStageError>
{
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let creds = match (
        operation_config.signing_requirements,
        config.get::<Credentials>(),
    ) {
        (SigningRequirements::Disabled, _) => return Ok(None),
        (SigningRequirements::Optional, None) => return Ok(None),
        (SigningRequirements::Required, None) => {
            return Err(SigningStageError::MissingCredentials)
        }
        (_, Some(creds)) => creds,
    };
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service: signing_service,
    };
    Ok(Some((operation_config, request_config, creds)))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|req, config| {
            let (operation_config, request_config, creds) = match signing_config(config)? {
                Some(config) => config,
                None => return Ok(req),
            };

            // Only a fully loaded body can be hashed. The signature is computed over a copy of the
            // request parts and the original body is reattached afterwards.
            let (parts, body) = req.into_parts();
            let signable_body = body.bytes().ok_or(SigningStageError::InvalidBodyType)?;
            let mut signable_request = http::Request::from_parts(parts, ());

            let signature = self.signer.sign(
                operation_config,
                &request_config,
                creds,
                SignableBody::Bytes(signable_body),
                &mut signable_request,
            )?;
            tracing::trace!(signature = %signature, "signed request");
            let (signed_parts, _) = signable_request.into_parts();
            Ok(http::Request::from_parts(signed_parts, body))
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer, SigningRequirements};
    use aws_endpoint::partition::endpoint::Metadata;
    use aws_endpoint::{set_endpoint_resolver, AwsEndpointStage};
    use aws_types::region::{Region, SigningRegion};
    use aws_types::{Credentials, SigningService};
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    fn signing_props(req: &mut operation::Request) {
        let mut props = req.properties_mut();
        props.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
        props.insert(SigningRegion::from_static("us-east-1"));
        props.insert(SigningService::from_static("glacier"));
        props.insert(OperationSigningConfig::default_config());
        props.insert(Credentials::from_keys("AKIAfoo", "bar", None));
    }

    #[test]
    fn signs_request_and_keeps_body() {
        let mut req = operation::Request::new(
            http::Request::put("https://glacier.us-east-1.amazonaws.com/-/vaults/x")
                .body(SdkBody::from("{}"))
                .unwrap(),
        );
        signing_props(&mut req);
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = signer.apply(req).expect("signing succeeded");
        let (req, _) = req.into_parts();
        let auth = req
            .headers()
            .get(AUTHORIZATION)
            .expect("auth header must be present")
            .to_str()
            .unwrap();
        assert!(auth.contains("Credential=AKIAfoo/20210120/us-east-1/glacier/aws4_request"));
        assert_eq!(req.headers().get("x-amz-date").unwrap(), "20210120T163347Z");
        assert_eq!(req.body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn missing_credentials_is_an_error() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("")));
        signing_props(&mut req);
        req.properties_mut().remove::<Credentials>();
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let err = signer.apply(req).expect_err("no credentials");
        assert!(matches!(err, SigningStageError::MissingCredentials));
    }

    #[test]
    fn disabled_signing_leaves_request_untouched() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("")));
        signing_props(&mut req);
        let mut config = OperationSigningConfig::default_config();
        config.signing_requirements = SigningRequirements::Disabled;
        req.properties_mut().insert(config);
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let (req, _) = signer.apply(req).expect("no signing").into_parts();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    // check that the endpoint middleware followed by signing middleware produce the expected result
    #[test]
    fn endpoint_plus_signer() {
        let provider = Arc::new(Metadata::regional("glacier.{region}.amazonaws.com"));
        let req = http::Request::builder()
            .uri("/-/vaults")
            .body(SdkBody::from(""))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-east-1"));
            props.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
            props.insert(SigningService::from_static("glacier"));
            props.insert(OperationSigningConfig::default_config());
            props.insert(Credentials::from_keys("AKIAfoo", "bar", None));
            set_endpoint_resolver(&mut props, provider);
        };
        let endpoint = AwsEndpointStage::new();
        let req = endpoint.apply(req).expect("add endpoint should succeed");
        let signer = SigV4SigningStage::new(SigV4Signer::new());
        let req = signer.apply(req).expect("signing succeeded");
        let (req, _) = req.into_parts();
        assert_eq!(req.uri(), "https://glacier.us-east-1.amazonaws.com/-/vaults");
        let auth_header = req.headers().get(AUTHORIZATION).expect("auth header must be present");
        assert!(auth_header
            .to_str()
            .unwrap()
            .contains("/us-east-1/glacier/aws4_request"));
    }
}
