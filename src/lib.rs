//! 无向带权图的最小生成树：Prim 与 Kruskal 两个引擎，以及边表读取、
//! 报告输出和命令行驱动。
//!
//! 核心（[`graph`]、[`mst`]）不做任何 I/O，只在已校验的图上计算；
//! [`ingest`] 负责读取与校验，错误以 `Result` 返回给调用方。

pub mod config;
pub mod driver;
pub mod graph;
pub mod ingest;
pub mod mst;
pub mod options;
pub mod report;
