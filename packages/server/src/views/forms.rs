use super::escape;

/// "About this tool" panel shown on the live page.
pub fn about_panel() -> &'static str {
    r#"<details open>
<summary>About this tool</summary>
<p><strong>One-sentence description:</strong> AI-powered market and workforce intelligence from multi-source signals.</p>
<p><strong>What it does:</strong> Ingests marketing content and workforce demand signals, then produces
executive-ready insights: trends, value propositions, in-demand roles and skills, alignment analysis,
skill gaps and business recommendations.</p>
<p><strong>Who it is for:</strong> Non-technical stakeholders who want decision-ready insights without using n8n.</p>
<p><strong>How it works:</strong> Your brand and goal are sent to an n8n workflow, which gathers signals and
asks a language model for the report rendered below.</p>
</details>"#
}

/// Brand + goal form posting to `/run`.
pub fn live_form(brand: &str, goal: &str) -> String {
    format!(
        r#"<form method="post" action="/run">
<label for="brand">Brand</label>
<input type="text" id="brand" name="brand" value="{brand}" placeholder="e.g. Madison">
<label for="goal">Goal</label>
<textarea id="goal" name="goal" rows="3" placeholder="What should the workflow find out?">{goal}</textarea>
<p><button type="submit">Generate insights</button></p>
</form>"#,
        brand = escape(brand),
        goal = escape(goal),
    )
}

/// Upload / paste form posting to `/inspect`.
pub fn inspect_form(pasted: &str, debug: bool) -> String {
    format!(
        r#"<form method="post" action="/inspect" enctype="multipart/form-data">
<div class="columns">
<div>
<label for="file">Upload your workflow output JSON</label>
<input type="file" id="file" name="file" accept=".json,application/json">
</div>
<div>
<label for="pasted">Or paste the JSON contents here</label>
<textarea id="pasted" name="pasted" rows="10" placeholder="Paste the contents of the output file here">{pasted}</textarea>
</div>
</div>
<label><input type="checkbox" name="debug" value="on"{checked}> Show raw JSON (debug)</label>
<p><button type="submit">Show insights</button></p>
</form>"#,
        pasted = escape(pasted),
        checked = if debug { " checked" } else { "" },
    )
}
