// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// 编码字母表
///
/// 顺序为小写字母a-z在前、数字0-9在后，进位语义依赖这个顺序。
/// 注意这不是标准base-36（数字在前）的顺序。
pub const CODE_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 编码错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodeError {
    /// 编码空间已耗尽
    #[error("Code space exhausted")]
    Exhausted,

    /// 编码中出现字母表之外的符号
    #[error("Symbol '{0}' is outside the code alphabet")]
    InvalidSymbol(char),
}

/// 计算编码序列中的下一个编码
///
/// 把编码当作定宽的base-36计数器，最高位在索引0。
/// 从末位向前扫描：末位符号为字母表最大符号时重置为最小符号并向前进位，
/// 否则替换为字母表中的下一个符号并停止。
///
/// # 返回值
///
/// * `Ok(String)` - 序列中的后继编码
/// * `Err(CodeError::Exhausted)` - 进位越过首位（所有位均为最大符号）
/// * `Err(CodeError::InvalidSymbol)` - 输入包含字母表之外的符号
pub fn increment(code: &str) -> Result<String, CodeError> {
    // Every position must hold an alphabet symbol, not only the ones the
    // carry touches
    let mut positions = code
        .as_bytes()
        .iter()
        .map(|&b| {
            CODE_ALPHABET
                .iter()
                .position(|&symbol| symbol == b)
                .ok_or(CodeError::InvalidSymbol(b as char))
        })
        .collect::<Result<Vec<usize>, CodeError>>()?;

    for i in (0..positions.len()).rev() {
        if positions[i] + 1 == CODE_ALPHABET.len() {
            // Max symbol: reset this position and carry leftward
            positions[i] = 0;
            continue;
        }

        positions[i] += 1;
        return Ok(positions.iter().map(|&p| CODE_ALPHABET[p] as char).collect());
    }

    // Carry propagated past position 0: the sequence space is exhausted
    Err(CodeError::Exhausted)
}
