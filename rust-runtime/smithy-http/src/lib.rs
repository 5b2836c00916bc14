/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Core HTTP primitives shared by every generated client: request bodies, the operation and
//! property bag abstractions, response parsing, and the table-driven request builder.

pub mod body;
pub mod endpoint;
pub mod header;
pub mod label;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod query;
pub mod response;
pub mod result;
pub mod retry;
pub mod shape;
mod urlencode;
