use crate::feedback::{Category, Notification};
use crate::messages::format_hours;
use crate::models::{DayView, TimesheetResponse};
use std::time::Duration;

pub const TIP_PRESETS: [u32; 3] = [2, 5, 10];

pub fn render_index(snapshot: &TimesheetResponse, reminder_interval: Duration) -> String {
    let cards: String = snapshot.days.iter().map(render_day_card).collect();
    let tips: String = TIP_PRESETS
        .iter()
        .map(|amount| {
            format!(r#"<button class="tip" type="button" data-tip="{amount}">${amount}</button>"#)
        })
        .collect();
    let (timer_label, started_at) = match snapshot.timer.started_at_ms {
        Some(ms) => ("Stop Thymer", ms.to_string()),
        None => ("Start Thymer", String::new()),
    };

    INDEX_HTML
        .replace("{{TIP_BUTTONS}}", &tips)
        .replace("{{TOTAL}}", &escape_html(&snapshot.total_display))
        .replace("{{CUMULATIVE}}", &format_hours(snapshot.cumulative_hours))
        .replace("{{TIMER_LABEL}}", timer_label)
        .replace("{{TIMER_STARTED_AT}}", &started_at)
        .replace(
            "{{ELAPSED}}",
            &format!("{:.2}", snapshot.timer.elapsed_hours),
        )
        .replace(
            "{{ACK}}",
            &escape_html(snapshot.acknowledgement.as_deref().unwrap_or_default()),
        )
        .replace("{{REMINDER_MS}}", &reminder_interval.as_millis().to_string())
        .replace(
            "{{ACK_MS}}",
            &snapshot.acknowledgement_ms.unwrap_or_default().to_string(),
        )
        .replace("{{DAY_CARDS}}", &cards)
}

fn render_day_card(view: &DayView) -> String {
    let notification = &view.notification;
    let (class, message) = match (&notification.message, notification.show) {
        (Some(message), true) => (
            format!("note {}", category_class(notification)),
            escape_html(message),
        ),
        _ => ("note".to_string(), String::new()),
    };

    format!(
        r#"
      <div class="day" data-day="{day}">
        <h2><span class="full">{day}</span><span class="short">{short}</span></h2>
        <label class="entry">
          <input type="number" min="0" max="24" step="0.5" placeholder="0" name="{day}" value="{value}" />
          <span class="unit">hrs</span>
        </label>
        <div class="{class}" id="note-{day}">{message}</div>
      </div>"#,
        day = view.day,
        short = view.short,
        value = escape_html(&view.value),
    )
}

fn category_class(notification: &Notification) -> &'static str {
    match notification.category {
        Category::Under => "under",
        Category::Exact => "exact",
        Category::Over => "over",
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Weekly Thymesheet</title>
  <style>
    :root {
      --bg-1: #f4f5f7;
      --bg-2: #e6e9ef;
      --ink: #1f2933;
      --muted: #6b7280;
      --accent: #2563eb;
      --under: #d97706;
      --exact: #4b5563;
      --over: #16a34a;
      --card: #ffffff;
      --shadow: 0 10px 30px rgba(31, 41, 51, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Inter", "Helvetica Neue", sans-serif;
      padding: 32px 18px 48px;
    }

    h1 {
      text-align: center;
      margin: 0 0 28px;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .week {
      display: grid;
      grid-template-columns: repeat(7, minmax(0, 1fr));
      gap: 12px;
    }

    .day {
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 14px;
    }

    .day h2 {
      margin: 0 0 10px;
      font-size: 1rem;
      text-align: center;
    }

    .day .short {
      display: none;
    }

    .entry {
      position: relative;
      display: block;
    }

    .entry input {
      width: 100%;
      padding: 8px 36px 8px 10px;
      border: 1px solid #d1d5db;
      border-radius: 8px;
      font-size: 1rem;
    }

    .entry .unit {
      position: absolute;
      right: 10px;
      top: 50%;
      transform: translateY(-50%);
      color: var(--muted);
      font-size: 0.8rem;
    }

    .note {
      margin-top: 6px;
      min-height: 1em;
      font-size: 0.75rem;
      text-align: center;
    }

    .note.under { color: var(--under); }
    .note.exact { color: var(--exact); }
    .note.over { color: var(--over); }

    .panel {
      margin-top: 24px;
      background: var(--card);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 18px 22px;
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .total {
      font-size: 1.6rem;
      font-weight: 700;
      color: var(--accent);
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: #e5e7eb;
      color: var(--ink);
    }

    .status {
      margin-top: 16px;
      text-align: center;
      min-height: 1.2em;
      color: var(--over);
    }

    dialog {
      border: none;
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 24px;
      max-width: 360px;
    }

    dialog .tips {
      display: flex;
      gap: 8px;
      margin: 12px 0;
    }

    dialog input {
      width: 100%;
      padding: 8px 10px;
      border: 1px solid #d1d5db;
      border-radius: 8px;
      margin-bottom: 12px;
    }

    @media (max-width: 760px) {
      .day .full { display: none; }
      .day .short { display: inline; }
      .week { gap: 6px; }
      .day { padding: 8px; }
    }
  </style>
</head>
<body>
  <main>
    <h1>Weekly Thymesheet</h1>

    <section class="week">{{DAY_CARDS}}
    </section>

    <section class="panel">
      <div>
        <div>Total Hours</div>
        <div class="total" id="total">{{TOTAL}}</div>
        <div class="hint">All-time: <span id="cumulative">{{CUMULATIVE}}</span> hrs</div>
      </div>
      <div class="actions">
        <form id="timer-form" method="post" action="/timer/toggle">
          <button id="timer-btn" type="submit" data-started-at="{{TIMER_STARTED_AT}}">{{TIMER_LABEL}}</button>
        </form>
        <span id="elapsed">{{ELAPSED}} hrs</span>
        <form id="copy-form" method="post" action="/week/copy">
          <button class="secondary" id="copy-btn" type="submit">Copy last week</button>
        </form>
        <button id="submit-btn" type="button">Submit</button>
      </div>
    </section>

    <div class="status" id="status">{{ACK}}</div>
  </main>

  <dialog id="tip-dialog">
    <h3>Before you submit...</h3>
    <p>Would you like to tip your timesheet?</p>
    <div class="tips">{{TIP_BUTTONS}}</div>
    <input id="custom-tip" type="number" min="0" step="0.01" placeholder="Custom amount" />
    <div class="actions">
      <button id="confirm-btn" type="button">Confirm</button>
      <button class="secondary" id="skip-btn" type="button">Skip</button>
    </div>
  </dialog>

  <script>
    const REMINDER_MS = {{REMINDER_MS}};
    const ACK_REMAINING_MS = {{ACK_MS}};
    const totalEl = document.getElementById('total');
    const cumulativeEl = document.getElementById('cumulative');
    const statusEl = document.getElementById('status');
    const timerBtn = document.getElementById('timer-btn');
    const elapsedEl = document.getElementById('elapsed');
    const dialog = document.getElementById('tip-dialog');
    const customTip = document.getElementById('custom-tip');

    let tickHandle = null;
    let reminderHandle = null;
    let ackHandle = null;

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const renderDay = (view) => {
      const card = document.querySelector(`.day[data-day="${view.day}"]`);
      if (!card) {
        return;
      }
      const input = card.querySelector('input');
      if (document.activeElement !== input) {
        input.value = view.value;
      }
      const note = card.querySelector('.note');
      note.className = 'note';
      note.textContent = '';
      if (view.notification.show) {
        note.classList.add(view.notification.category);
        note.textContent = view.notification.message || '';
      }
    };

    const renderSnapshot = (snapshot) => {
      snapshot.days.forEach(renderDay);
      totalEl.textContent = snapshot.total_display;
      cumulativeEl.textContent = snapshot.cumulative_hours;
      renderTimer(snapshot.timer);
    };

    const stopTick = () => {
      if (tickHandle !== null) {
        clearInterval(tickHandle);
        tickHandle = null;
      }
    };

    const renderTimer = (timer) => {
      stopTick();
      if (timer.running && timer.started_at_ms !== null) {
        timerBtn.textContent = 'Stop Thymer';
        const tick = () => {
          const hours = (Date.now() - timer.started_at_ms) / 3600000;
          elapsedEl.textContent = `${Math.max(hours, 0).toFixed(2)} hrs`;
        };
        tick();
        tickHandle = setInterval(tick, 1000);
      } else {
        timerBtn.textContent = 'Start Thymer';
        elapsedEl.textContent = '0.00 hrs';
      }
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    document.querySelectorAll('.day input').forEach((input) => {
      input.addEventListener('input', () => {
        const day = input.closest('.day').dataset.day;
        api('/api/hours', {
          method: 'POST',
          body: JSON.stringify({ day, value: input.value })
        })
          .then((res) => {
            renderDay(res.day);
            totalEl.textContent = res.total_display;
          })
          .catch((err) => setStatus(err.message));
      });
    });

    document.getElementById('timer-form').addEventListener('submit', (event) => {
      event.preventDefault();
      api('/api/timer/toggle', {
        method: 'POST',
        body: JSON.stringify({ weekday: new Date().getDay() })
      })
        .then((res) => {
          renderTimer(res.timer);
          if (res.updated_day) {
            renderDay(res.updated_day);
          }
          totalEl.textContent = res.total_display;
        })
        .catch((err) => setStatus(err.message));
    });

    document.getElementById('copy-form').addEventListener('submit', (event) => {
      event.preventDefault();
      api('/api/week/copy', { method: 'POST' })
        .then(renderSnapshot)
        .catch((err) => setStatus(err.message));
    });

    document.getElementById('submit-btn').addEventListener('click', () => {
      customTip.value = '';
      dialog.showModal();
    });

    document.querySelectorAll('.tip').forEach((button) => {
      button.addEventListener('click', () => {
        customTip.value = button.dataset.tip;
      });
    });

    const submitWeek = (tip) => {
      dialog.close();
      api('/api/submit', { method: 'POST', body: JSON.stringify({ tip }) })
        .then((res) => {
          document.querySelectorAll('.day').forEach((card) => {
            card.querySelector('input').value = '';
            const note = card.querySelector('.note');
            note.className = 'note';
            note.textContent = '';
          });
          totalEl.textContent = '0.0 hrs';
          cumulativeEl.textContent = res.cumulative_hours;
          setStatus(res.acknowledgement);
          clearTimeout(ackHandle);
          ackHandle = setTimeout(() => setStatus(''), res.acknowledgement_ms);
        })
        .catch((err) => setStatus(err.message));
    };

    document.getElementById('confirm-btn').addEventListener('click', () => {
      submitWeek(customTip.value === '' ? null : customTip.value);
    });

    document.getElementById('skip-btn').addEventListener('click', () => submitWeek(null));

    const remind = () => {
      fetch('/api/reminder')
        .then((res) => res.json())
        .then((res) => new Notification('Timesheet reminder', { body: res.message }))
        .catch((err) => console.log('reminder failed', err));
    };

    const startReminders = () => {
      if (!('Notification' in window)) {
        console.log('Notifications are not supported in this browser');
        return;
      }
      Notification.requestPermission().then((permission) => {
        if (permission !== 'granted') {
          return;
        }
        remind();
        reminderHandle = setInterval(remind, REMINDER_MS);
      });
    };

    window.addEventListener('beforeunload', () => {
      stopTick();
      if (reminderHandle !== null) {
        clearInterval(reminderHandle);
      }
    });

    if (ACK_REMAINING_MS > 0) {
      ackHandle = setTimeout(() => setStatus(''), ACK_REMAINING_MS);
    }

    const startedAt = timerBtn.dataset.startedAt;
    renderTimer({
      running: startedAt !== '',
      started_at_ms: startedAt === '' ? null : Number(startedAt)
    });
    startReminders();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timesheet_response;
    use crate::days::Day;
    use crate::timesheet::TimesheetForm;
    use chrono::Utc;
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Instant;

    #[test]
    fn renders_every_day_and_the_total() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut form = TimesheetForm::new();
        form.set_hours(Day::Monday, "10", &mut rng);

        let snapshot = timesheet_response(&form, 4.5, Utc::now(), Instant::now());
        let html = render_index(&snapshot, Duration::from_secs(1200));

        for day in crate::days::DAYS {
            assert!(html.contains(&format!(r#"data-day="{day}""#)));
        }
        assert!(html.contains("10.0 hrs"));
        assert!(html.contains(r#"value="10""#));
        assert!(html.contains("const REMINDER_MS = 1200000;"));
        assert!(html.contains("Start Thymer"));
        assert!(html.contains("const ACK_REMAINING_MS = 0;"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn acknowledgement_clears_after_what_is_left_of_the_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut form = TimesheetForm::new();
        let submitted_at = Instant::now();
        let submission = form.submit(None, 0.0, submitted_at, &mut rng);

        let rendered_at = submitted_at + Duration::from_millis(1_250);
        let snapshot = timesheet_response(&form, 0.0, Utc::now(), rendered_at);
        let html = render_index(&snapshot, Duration::from_secs(60));
        assert!(html.contains("const ACK_REMAINING_MS = 1750;"));
        assert!(html.contains(&escape_html(&submission.acknowledgement)));
    }

    #[test]
    fn typed_text_is_escaped() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut form = TimesheetForm::new();
        form.set_hours(Day::Tuesday, r#""><script>"#, &mut rng);

        let snapshot = timesheet_response(&form, 0.0, Utc::now(), Instant::now());
        let html = render_index(&snapshot, Duration::from_secs(60));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}
