/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{AwsEndpoint, BoxError, CredentialScope, ResolveAwsEndpoint};
use aws_types::region::{Region, SigningRegion};
use smithy_http::endpoint::Endpoint;

/// Endpoint metadata
///
/// The default endpoint of a service: a hostname template plus the protocol used to reach it.
#[derive(Debug)]
pub struct Metadata {
    /// URI for the endpoint.
    ///
    /// May contain `{region}` which will replaced with the region during endpoint construction
    pub uri_template: &'static str,

    /// Protocol to use for this endpoint
    pub protocol: Protocol,

    /// Credential scope to set for requests to this endpoint
    pub credential_scope: CredentialScope,

    /// Signature versions supported by this endpoint.
    ///
    /// Currently unused since the SDK only supports SigV4
    pub signature_versions: SignatureVersion,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SignatureVersion {
    V4,
}

impl Metadata {
    /// `<service>.{region}.amazonaws.com` over HTTPS with the default credential scope
    pub const fn regional(uri_template: &'static str) -> Self {
        Metadata {
            uri_template,
            protocol: Protocol::Https,
            credential_scope: CredentialScope::empty(),
            signature_versions: SignatureVersion::V4,
        }
    }

    /// One endpoint for every region, with requests signed for `signing_region`
    pub fn global(uri_template: &'static str, signing_region: &'static str) -> Self {
        Metadata {
            uri_template,
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .region(SigningRegion::from_static(signing_region))
                .build(),
            signature_versions: SignatureVersion::V4,
        }
    }
}

impl ResolveAwsEndpoint for Metadata {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::mutable(uri.parse()?);
        let ep = AwsEndpoint {
            endpoint,
            credential_scope: CredentialScope {
                service: self.credential_scope.service.clone(),
                region: self
                    .credential_scope
                    .region
                    .clone()
                    .or_else(|| Some(region.clone().into())),
            },
        };
        Ok(ep)
    }
}

#[cfg(test)]
mod test {
    use crate::partition::endpoint::Metadata;
    use crate::ResolveAwsEndpoint;
    use aws_types::region::{Region, SigningRegion};
    use http::Uri;

    #[test]
    fn template_substitutes_region() {
        let metadata = Metadata::regional("glacier.{region}.amazonaws.com");
        let endpoint = metadata
            .resolve_endpoint(&Region::new("eu-central-1"))
            .unwrap();
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://glacier.eu-central-1.amazonaws.com")
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("eu-central-1"))
        );
    }

    #[test]
    fn global_endpoint_pins_the_signing_region() {
        let metadata = Metadata::global("route53.amazonaws.com", "us-east-1");
        let endpoint = metadata
            .resolve_endpoint(&Region::new("ap-southeast-2"))
            .unwrap();
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://route53.amazonaws.com")
        );
        assert_eq!(
            endpoint.credential_scope().region(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
    }
}
