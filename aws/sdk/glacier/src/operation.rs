/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP bindings of every Glacier operation.

use crate::config::Config;
use crate::error::Error;
use crate::input::*;
use crate::model::{VaultAccessPolicy, VaultNotificationConfig};
use crate::output::*;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use smithy_http::header;
use smithy_http::operation::{self, BuildError, Metadata, Operation};
use smithy_http::shape::{HttpOperation, OperationShape, ResponseParser};

const SERVICE: &str = "glacier";
const API_VERSION: &str = "2012-06-01";
const VAULT: &[&str] = &["AccountId", "VaultName"];

/// Build the operation that sends `input`
///
/// Fails without side effects when a required member was never set.
pub fn make_operation<I>(
    input: &I,
    conf: &Config,
) -> Result<Operation<ResponseParser<I>>, BuildError>
where
    I: HttpOperation<Error = Error>,
{
    let mut request = I::SHAPE.request(input)?;
    let headers = request.headers_mut();
    headers.insert(
        "x-amz-glacier-version",
        HeaderValue::from_static(API_VERSION),
    );
    if headers.contains_key(http::header::CONTENT_LENGTH) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    let mut request = operation::Request::new(request);
    {
        let mut props = request.properties_mut();
        conf.apply(&mut props);
        props.insert(SigningService::from_static(SERVICE));
        let mut signing_config = OperationSigningConfig::default_config();
        signing_config.signing_options.content_sha256_header = true;
        props.insert(signing_config);
    }
    Ok(Operation::new(request, ResponseParser::new())
        .with_metadata(Metadata::new(I::SHAPE.name, SERVICE)))
}

fn check_status(response: &http::Response<Bytes>) -> Result<(), Error> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(Error::from_response(response))
    }
}

/// Deserialize a JSON body. An empty body yields the default value.
fn parse_json<T>(body: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(Error::unhandled)
}

/// Deserialize a JSON body bound to a single member
fn parse_payload<T>(body: &[u8]) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(Error::unhandled)
}

fn string_header(
    response: &http::Response<Bytes>,
    key: &str,
) -> Result<Option<String>, Error> {
    header::one_or_none(response.headers(), key).map_err(Error::unhandled)
}

/// Operations whose output is read from a JSON body
macro_rules! json_operation {
    ($input:ty => $output:ty, $name:literal, $method:ident, $uri:literal, $required:expr) => {
        impl HttpOperation for $input {
            type Output = $output;
            type Error = Error;

            const SHAPE: OperationShape = OperationShape {
                name: $name,
                method: Method::$method,
                uri: $uri,
                required: $required,
            };

            fn parse_response(response: &http::Response<Bytes>) -> Result<$output, Error> {
                check_status(response)?;
                parse_json(response.body())
            }
        }
    };
}

json_operation!(
    AbortVaultLockInput => AbortVaultLockOutput,
    "AbortVaultLock", DELETE, "/{AccountId}/vaults/{VaultName}/lock-policy", VAULT
);
json_operation!(
    AddTagsToVaultInput => AddTagsToVaultOutput,
    "AddTagsToVault", POST, "/{AccountId}/vaults/{VaultName}/tags?operation=add", VAULT
);
json_operation!(
    CompleteVaultLockInput => CompleteVaultLockOutput,
    "CompleteVaultLock", POST, "/{AccountId}/vaults/{VaultName}/lock-policy/{LockId}",
    &["AccountId", "VaultName", "LockId"]
);
json_operation!(
    DeleteVaultInput => DeleteVaultOutput,
    "DeleteVault", DELETE, "/{AccountId}/vaults/{VaultName}", VAULT
);
json_operation!(
    DeleteVaultAccessPolicyInput => DeleteVaultAccessPolicyOutput,
    "DeleteVaultAccessPolicy", DELETE, "/{AccountId}/vaults/{VaultName}/access-policy", VAULT
);
json_operation!(
    DeleteVaultNotificationsInput => DeleteVaultNotificationsOutput,
    "DeleteVaultNotifications", DELETE,
    "/{AccountId}/vaults/{VaultName}/notification-configuration", VAULT
);
json_operation!(
    DescribeJobInput => DescribeJobOutput,
    "DescribeJob", GET, "/{AccountId}/vaults/{VaultName}/jobs/{JobId}",
    &["AccountId", "VaultName", "JobId"]
);
json_operation!(
    DescribeVaultInput => DescribeVaultOutput,
    "DescribeVault", GET, "/{AccountId}/vaults/{VaultName}", VAULT
);
json_operation!(
    GetDataRetrievalPolicyInput => GetDataRetrievalPolicyOutput,
    "GetDataRetrievalPolicy", GET, "/{AccountId}/policies/data-retrieval", &["AccountId"]
);
json_operation!(
    GetVaultLockInput => GetVaultLockOutput,
    "GetVaultLock", GET, "/{AccountId}/vaults/{VaultName}/lock-policy", VAULT
);
json_operation!(
    ListJobsInput => ListJobsOutput,
    "ListJobs", GET, "/{AccountId}/vaults/{VaultName}/jobs", VAULT
);
json_operation!(
    ListTagsForVaultInput => ListTagsForVaultOutput,
    "ListTagsForVault", GET, "/{AccountId}/vaults/{VaultName}/tags", VAULT
);
json_operation!(
    ListVaultsInput => ListVaultsOutput,
    "ListVaults", GET, "/{AccountId}/vaults", &["AccountId"]
);
json_operation!(
    RemoveTagsFromVaultInput => RemoveTagsFromVaultOutput,
    "RemoveTagsFromVault", POST, "/{AccountId}/vaults/{VaultName}/tags?operation=remove", VAULT
);
json_operation!(
    SetDataRetrievalPolicyInput => SetDataRetrievalPolicyOutput,
    "SetDataRetrievalPolicy", PUT, "/{AccountId}/policies/data-retrieval", &["AccountId"]
);
json_operation!(
    SetVaultAccessPolicyInput => SetVaultAccessPolicyOutput,
    "SetVaultAccessPolicy", PUT, "/{AccountId}/vaults/{VaultName}/access-policy", VAULT
);
json_operation!(
    SetVaultNotificationsInput => SetVaultNotificationsOutput,
    "SetVaultNotifications", PUT,
    "/{AccountId}/vaults/{VaultName}/notification-configuration", VAULT
);

impl HttpOperation for CreateVaultInput {
    type Output = CreateVaultOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "CreateVault",
        method: Method::PUT,
        uri: "/{AccountId}/vaults/{VaultName}",
        required: VAULT,
    };

    fn parse_response(response: &http::Response<Bytes>) -> Result<CreateVaultOutput, Error> {
        check_status(response)?;
        Ok(CreateVaultOutput {
            location: string_header(response, "Location")?,
        })
    }
}

impl HttpOperation for GetVaultAccessPolicyInput {
    type Output = GetVaultAccessPolicyOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "GetVaultAccessPolicy",
        method: Method::GET,
        uri: "/{AccountId}/vaults/{VaultName}/access-policy",
        required: VAULT,
    };

    fn parse_response(
        response: &http::Response<Bytes>,
    ) -> Result<GetVaultAccessPolicyOutput, Error> {
        check_status(response)?;
        Ok(GetVaultAccessPolicyOutput {
            policy: parse_payload::<VaultAccessPolicy>(response.body())?,
        })
    }
}

impl HttpOperation for GetVaultNotificationsInput {
    type Output = GetVaultNotificationsOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "GetVaultNotifications",
        method: Method::GET,
        uri: "/{AccountId}/vaults/{VaultName}/notification-configuration",
        required: VAULT,
    };

    fn parse_response(
        response: &http::Response<Bytes>,
    ) -> Result<GetVaultNotificationsOutput, Error> {
        check_status(response)?;
        Ok(GetVaultNotificationsOutput {
            vault_notification_config: parse_payload::<VaultNotificationConfig>(
                response.body(),
            )?,
        })
    }
}

impl HttpOperation for InitiateJobInput {
    type Output = InitiateJobOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "InitiateJob",
        method: Method::POST,
        uri: "/{AccountId}/vaults/{VaultName}/jobs",
        required: VAULT,
    };

    fn parse_response(response: &http::Response<Bytes>) -> Result<InitiateJobOutput, Error> {
        check_status(response)?;
        Ok(InitiateJobOutput {
            location: string_header(response, "Location")?,
            job_id: string_header(response, "x-amz-job-id")?,
            job_output_path: string_header(response, "x-amz-job-output-path")?,
        })
    }
}

impl HttpOperation for InitiateVaultLockInput {
    type Output = InitiateVaultLockOutput;
    type Error = Error;

    const SHAPE: OperationShape = OperationShape {
        name: "InitiateVaultLock",
        method: Method::POST,
        uri: "/{AccountId}/vaults/{VaultName}/lock-policy",
        required: VAULT,
    };

    fn parse_response(
        response: &http::Response<Bytes>,
    ) -> Result<InitiateVaultLockOutput, Error> {
        check_status(response)?;
        Ok(InitiateVaultLockOutput {
            lock_id: string_header(response, "x-amz-lock-id")?,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::config::Config;
    use crate::error::ErrorKind;
    use crate::input::{
        CompleteVaultLockInput, CreateVaultInput, DeleteVaultInput, GetVaultAccessPolicyInput,
        GetVaultLockInput, InitiateJobInput, InitiateVaultLockInput, ListJobsInput,
        ListVaultsInput, SetVaultAccessPolicyInput,
    };
    use crate::model::{JobParameters, VaultAccessPolicy, VaultLockPolicy};
    use crate::operation::make_operation;
    use aws_types::region::Region;
    use bytes::Bytes;
    use smithy_http::operation::BuildError;
    use smithy_http::shape::HttpOperation;

    fn conf() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn delete_vault_request() {
        let input = DeleteVaultInput::builder()
            .account_id("-")
            .vault_name("x")
            .build();
        let op = make_operation(&input, &conf()).expect("valid input");
        let (request, _) = op.into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(request.method(), "DELETE");
        assert_eq!(request.uri(), "/-/vaults/x");
        assert_eq!(
            request.headers().get("x-amz-glacier-version").unwrap(),
            "2012-06-01"
        );
        assert!(request.headers().get("content-type").is_none());
    }

    #[test]
    fn missing_vault_name() {
        let input = DeleteVaultInput::builder().account_id("-").build();
        match make_operation(&input, &conf()) {
            Err(BuildError::MissingField { field }) => assert_eq!(field, "VaultName"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("VaultName is required"),
        }
    }

    #[test]
    fn payload_members_are_the_body() {
        let input = SetVaultAccessPolicyInput::builder()
            .account_id("-")
            .vault_name("x")
            .policy(VaultAccessPolicy::builder().policy("{}").build())
            .build();
        let (request, _) = make_operation(&input, &conf())
            .unwrap()
            .into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(request.method(), "PUT");
        assert_eq!(request.uri(), "/-/vaults/x/access-policy");
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(request.body().bytes(), Some(&br#"{"Policy":"{}"}"#[..]));

        let input = InitiateJobInput::builder()
            .account_id("-")
            .vault_name("x")
            .job_parameters(JobParameters::builder().r#type("inventory-retrieval").build())
            .build();
        let (request, _) = make_operation(&input, &conf())
            .unwrap()
            .into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(
            request.body().bytes(),
            Some(&br#"{"Type":"inventory-retrieval"}"#[..])
        );
    }

    #[test]
    fn vault_lock_lifecycle() {
        let input = InitiateVaultLockInput::builder()
            .account_id("-")
            .vault_name("x")
            .policy(VaultLockPolicy::builder().policy("{}").build())
            .build();
        let (request, _) = make_operation(&input, &conf())
            .unwrap()
            .into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/-/vaults/x/lock-policy");
        assert_eq!(request.body().bytes(), Some(&br#"{"Policy":"{}"}"#[..]));

        let initiated = http::Response::builder()
            .status(201)
            .header("x-amz-lock-id", "AE863rKkWZU53SLW5be4DUcW")
            .body(Bytes::new())
            .unwrap();
        let output = InitiateVaultLockInput::parse_response(&initiated).unwrap();
        assert_eq!(output.lock_id.as_deref(), Some("AE863rKkWZU53SLW5be4DUcW"));

        let input = CompleteVaultLockInput::builder()
            .account_id("-")
            .vault_name("x")
            .lock_id("AE863rKkWZU53SLW5be4DUcW")
            .build();
        let (request, _) = make_operation(&input, &conf())
            .unwrap()
            .into_request_response();
        let (request, _) = request.into_parts();
        assert_eq!(request.method(), "POST");
        assert_eq!(
            request.uri(),
            "/-/vaults/x/lock-policy/AE863rKkWZU53SLW5be4DUcW"
        );
        assert!(CompleteVaultLockInput::parse_response(&response(204, "")).is_ok());

        let output = GetVaultLockInput::parse_response(&response(
            200,
            r#"{"Policy":"{}","State":"InProgress","ExpirationDate":"2021-01-02T00:00:00.000Z","CreationDate":"2021-01-01T00:00:00.000Z"}"#,
        ))
        .expect("valid body");
        assert_eq!(output.policy.as_deref(), Some("{}"));
        assert_eq!(output.state.as_deref(), Some("InProgress"));
        assert_eq!(
            output.expiration_date.as_deref(),
            Some("2021-01-02T00:00:00.000Z")
        );
    }

    #[test]
    fn lock_id_is_required() {
        let input = CompleteVaultLockInput::builder()
            .account_id("-")
            .vault_name("x")
            .build();
        match make_operation(&input, &conf()) {
            Err(BuildError::MissingField { field }) => assert_eq!(field, "LockId"),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("LockId is required"),
        }
    }

    #[test]
    fn list_vaults_query() {
        let input = ListVaultsInput::builder().account_id("-").build();
        assert_eq!(ListVaultsInput::SHAPE.uri(&input).unwrap(), "/-/vaults");
        let input = ListVaultsInput::builder()
            .account_id("-")
            .limit(10)
            .marker("abc")
            .build();
        assert_eq!(
            ListVaultsInput::SHAPE.uri(&input).unwrap(),
            "/-/vaults?marker=abc&limit=10"
        );
    }

    #[test]
    fn list_outputs() {
        let output = ListVaultsInput::parse_response(&response(200, r#"{"VaultList":[]}"#))
            .expect("valid body");
        assert_eq!(output.vault_list, Some(vec![]));
        assert_eq!(output.marker, None);

        let output = ListJobsInput::parse_response(&response(
            200,
            r#"{"JobList":[{"JobId":"j","Completed":false,"StatusCode":"InProgress"}],"Marker":null}"#,
        ))
        .expect("valid body");
        let jobs = output.job_list.expect("jobs are present");
        assert_eq!(jobs[0].job_id.as_deref(), Some("j"));
        assert_eq!(jobs[0].completed, Some(false));
        assert_eq!(output.marker, None);
    }

    #[test]
    fn header_outputs() {
        let response = http::Response::builder()
            .status(202)
            .header("Location", "/1/vaults/x/jobs/j")
            .header("x-amz-job-id", "j")
            .body(Bytes::new())
            .unwrap();
        let output = InitiateJobInput::parse_response(&response).unwrap();
        assert_eq!(output.location.as_deref(), Some("/1/vaults/x/jobs/j"));
        assert_eq!(output.job_id.as_deref(), Some("j"));
        assert_eq!(output.job_output_path, None);

        let response = http::Response::builder()
            .status(201)
            .header("Location", "/1/vaults/x")
            .body(Bytes::new())
            .unwrap();
        let output = CreateVaultInput::parse_response(&response).unwrap();
        assert_eq!(output.location.as_deref(), Some("/1/vaults/x"));
    }

    #[test]
    fn empty_payload_is_unset() {
        let output = GetVaultAccessPolicyInput::parse_response(&response(200, "")).unwrap();
        assert_eq!(output.policy, None);
    }

    #[test]
    fn malformed_success_body_is_unhandled() {
        let err = ListVaultsInput::parse_response(&response(200, "{\"VaultList\":")).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
    }

    #[test]
    fn error_statuses_are_translated() {
        let err = DeleteVaultInput::parse_response(&response(
            404,
            r#"{"code":"ResourceNotFoundException","message":"no such vault"}"#,
        ))
        .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ResourceNotFoundException));
        assert_eq!(err.message(), Some("no such vault"));
    }
}
