/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Authentication Package
//!
//! SigV4 over request headers is the only supported signing mode.

pub mod middleware;
pub mod signer;
