// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod image_downloader;
pub mod page_fetcher;
pub mod traits;
