// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use hydropath::errors::HydropathError;

fn main() -> Result<(), HydropathError> {
    hydropath::run()
}
