use crate::domain::model::{describe, FieldSelector, Pattern, Scope, Slot, Source, ROOT_PATH};
use crate::utils::error::{LabError, Result};
use serde_json::{Map, Value};

/// 沿著 `a.b.c` 逐層查找巢狀 Record
pub fn lookup_path<'a>(record: &'a Map<String, Value>, path: &str) -> Result<&'a Value> {
    let mut current = record;
    let mut walked = String::new();
    let mut segments = path.split('.').peekable();

    while let Some(segment) = segments.next() {
        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);

        let value = current
            .get(segment)
            .ok_or_else(|| LabError::MissingField {
                path: walked.clone(),
            })?;

        if segments.peek().is_none() {
            return Ok(value);
        }

        current = value.as_object().ok_or_else(|| LabError::NotARecord {
            path: walked.clone(),
            found: describe(value),
        })?;
    }

    // split 至少產生一段，空路徑落在第一段的 MissingField
    Err(LabError::MissingField {
        path: path.to_string(),
    })
}

/// 依欄位名稱取值，每個 selector 產生一個綁定；來源不會被修改
pub fn extract_fields(record: &Map<String, Value>, selectors: &[FieldSelector]) -> Result<Scope> {
    let mut scope = Scope::new();
    for selector in selectors {
        let value = lookup_path(record, &selector.path)?;
        tracing::debug!("🔑 {} <- {}", selector.binding, selector.path);
        scope.declare(selector.binding.clone(), value.clone())?;
    }
    Ok(scope)
}

/// 依位置取值，`Slot::Skip` 佔位但不產生綁定
pub fn extract_positions(items: &[Value], slots: &[Slot]) -> Result<Scope> {
    if slots.len() > items.len() {
        return Err(LabError::IndexOutOfRange {
            index: items.len(),
            len: items.len(),
        });
    }

    let mut scope = Scope::new();
    for (index, slot) in slots.iter().enumerate() {
        match slot {
            Slot::Skip => tracing::debug!("⏭️  skip [{}]", index),
            Slot::Bind(name) => {
                tracing::debug!("📍 {} <- [{}]", name, index);
                scope.declare(name.clone(), items[index].clone())?;
            }
        }
    }
    Ok(scope)
}

/// 依單一字元切開字串，相鄰分隔符之間的空字串會保留
pub fn split_text(text: &str, delimiter: char) -> Vec<Value> {
    text.split(delimiter)
        .map(|part| Value::String(part.to_string()))
        .collect()
}

pub fn destructure(source: &Source, pattern: &Pattern) -> Result<Scope> {
    match (source, pattern) {
        (Source::Record(record), Pattern::Fields(selectors)) => extract_fields(record, selectors),
        (Source::Sequence(items), Pattern::Positions(slots)) => extract_positions(items, slots),
        (Source::Text { value, delimiter }, Pattern::Positions(slots)) => {
            let items = split_text(value, *delimiter);
            tracing::debug!("✂️  split into {} parts on {:?}", items.len(), delimiter);
            extract_positions(&items, slots)
        }
        (Source::Record(_), Pattern::Positions(_)) => Err(LabError::NotASequence {
            found: "a record".to_string(),
        }),
        (other, Pattern::Fields(_)) => Err(LabError::NotARecord {
            path: ROOT_PATH.to_string(),
            found: match other {
                Source::Text { .. } => "text".to_string(),
                _ => "a sequence".to_string(),
            },
        }),
    }
}

/// 文字原樣輸出，其他值輸出為精簡 JSON
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// 把指定的綁定以空白串成一行
pub fn render_line<I, S>(scope: &Scope, names: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let rendered = names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            scope
                .get(name)
                .map(render_value)
                .ok_or_else(|| LabError::UnknownBinding {
                    name: name.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(rendered.join(" "))
}
