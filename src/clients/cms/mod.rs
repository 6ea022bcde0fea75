//! Content API client for microCMS.
//!
//! This module provides the high-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`MicroCmsClient`]: the client with `get`, `get_list`, `get_list_detail`
//!   and `get_object`
//! - [`create_client`]: builds a client from plain strings
//! - [`GetRequest`], [`GetListRequest`], [`GetListDetailRequest`],
//!   [`GetObjectRequest`]: per-operation parameters

mod client;
mod requests;

pub use client::{create_client, MicroCmsClient};
pub use requests::{GetListDetailRequest, GetListRequest, GetObjectRequest, GetRequest};
