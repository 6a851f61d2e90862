// Copyright (C) 2025 Kashin Vladislav
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Joins `digits` into space-separated groups of `group_len` characters,
/// left to right. The last group may be shorter.
///
/// Expects an ASCII string; group boundaries are byte offsets.
pub fn join_digit_groups(digits: &str, group_len: usize) -> String {
    if digits.len() <= group_len {
        return digits.to_owned();
    }

    let group_count = digits.len().div_ceil(group_len);
    // one separator between every pair of groups
    let mut grouped = String::with_capacity(digits.len() + group_count - 1);

    let mut rest = digits;
    while rest.len() > group_len {
        let (group, tail) = rest.split_at(group_len);
        grouped.push_str(group);
        grouped.push(' ');
        rest = tail;
    }
    grouped.push_str(rest);
    grouped
}
