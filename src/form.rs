//! 抽出結果の編集（対話式 / 引数指定）

use crate::error::{NamecardError, Result};
use dialoguer::{Input, Select};
use namecard_common::{CardField, IndustryGroup, Session};

/// "phone=0123456789" 形式の引数を分解
pub fn parse_assignment(arg: &str) -> Result<(CardField, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| NamecardError::InvalidInput(format!("FIELD=VALUE 形式で指定してください: {}", arg)))?;
    let field = key
        .parse::<CardField>()
        .map_err(|_| NamecardError::InvalidInput(format!("不明な項目: {}", key)))?;
    Ok((field, value.to_string()))
}

/// 引数で指定された値をセッションに反映
pub fn apply_overrides(
    session: &mut Session,
    assignments: &[String],
    industry: Option<IndustryGroup>,
    notes: Option<&str>,
) -> Result<()> {
    for arg in assignments {
        let (field, value) = parse_assignment(arg)?;
        session.set_field(field, value);
    }
    if let Some(group) = industry {
        session.set_industry_group(group);
    }
    if let Some(notes) = notes {
        session.set_notes(notes);
    }
    Ok(())
}

/// 抽出結果を1項目ずつ確認・修正する
pub fn edit_interactive(session: &mut Session) -> Result<()> {
    println!("\n2. Thông Tin Trích Xuất");
    for field in CardField::ALL {
        let current = session.card().get(field).to_string();
        let value: String = Input::new()
            .with_prompt(field.label())
            .default(current)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)?;
        session.set_field(field, value);
    }

    println!("\n3. Nhóm Ngành Nghề");
    let labels: Vec<&str> = IndustryGroup::ALL.iter().map(|g| g.label()).collect();
    let current = IndustryGroup::ALL
        .iter()
        .position(|g| *g == session.industry_group())
        .unwrap_or(0);
    let selected = Select::new()
        .items(&labels)
        .default(current)
        .interact()
        .map_err(prompt_error)?;
    session.set_industry_group(IndustryGroup::ALL[selected]);

    println!("\n4. Ghi Chú (Không bắt buộc)");
    let notes: String = Input::new()
        .with_prompt("Ví dụ: địa điểm gặp, ngành nghề cụ thể...")
        .default(session.notes().to_string())
        .show_default(false)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;
    session.set_notes(notes);

    Ok(())
}

fn prompt_error(e: dialoguer::Error) -> NamecardError {
    NamecardError::InvalidInput(e.to_string())
}
