// 各测试文件只用到部分辅助函数
#![allow(dead_code)]

pub mod app_fixture;
pub mod mock_config;
pub mod recording;
pub mod test_data_builder;
