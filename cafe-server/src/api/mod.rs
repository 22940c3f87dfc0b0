//! API 路由模块
//!
//! Thin handlers: parse the request, call the catalog or ledger, wrap the
//! result in [`ApiResponse`](crate::utils::ApiResponse). No business rules
//! live here.
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 菜单接口
//! - [`tables`] - 桌台接口 (点单、清台、转台、小票)
//! - [`lines`] - 订单行接口 (加减数量、备注、部分付款、删除)

pub mod health;
pub mod lines;
pub mod products;
pub mod tables;
