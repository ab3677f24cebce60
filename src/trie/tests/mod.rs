// Copyright (c) 2025 Kokua Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Test suite for the Kokua Trie.
