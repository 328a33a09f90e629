use crate::models::Theme;

pub fn render_index(theme: Theme) -> String {
    let body_class = match theme {
        Theme::Light => "",
        Theme::Dark => "dark",
    };
    INDEX_HTML.replace("{{THEME}}", body_class)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Smart Study Planner</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #d9e7f5;
      --ink: #2b2a28;
      --accent: #4a7dff;
      --accent-2: #2f4858;
      --danger: #c63b2b;
      --ok: #2d7a4b;
      --card: rgba(255, 255, 255, 0.88);
      --row: #ffffff;
      --muted: #6b645d;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    body.dark {
      --bg-1: #191c22;
      --bg-2: #232936;
      --ink: #e8e6e1;
      --accent: #7da2ff;
      --accent-2: #9fb8c9;
      --card: rgba(30, 34, 43, 0.92);
      --row: #242a35;
      --muted: #9a958d;
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-2) 85%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      transition: background 300ms ease, color 300ms ease;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.7rem, 4vw, 2.4rem);
      margin: 0;
    }

    .header-actions {
      display: flex;
      gap: 10px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(74, 125, 255, 0.3);
    }

    .btn-ghost {
      background: transparent;
      color: var(--ink);
      border: 1px solid rgba(110, 110, 110, 0.35);
    }

    .btn-danger {
      background: var(--danger);
      color: white;
    }

    .add-row, .filter-row {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr auto;
      gap: 10px;
    }

    input, select {
      border: 1px solid rgba(110, 110, 110, 0.35);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 0.95rem;
      font-family: inherit;
      background: var(--row);
      color: var(--ink);
    }

    .progress-wrap {
      display: grid;
      gap: 8px;
    }

    .progress-meta {
      display: flex;
      justify-content: space-between;
      font-size: 0.95rem;
      color: var(--muted);
    }

    .progress-bar {
      height: 12px;
      border-radius: 999px;
      background: rgba(110, 110, 110, 0.2);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), var(--ok));
      transition: width 300ms ease;
    }

    ul.tasks {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li.task {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      background: var(--row);
      border: 1px solid rgba(110, 110, 110, 0.18);
      border-radius: 16px;
      padding: 12px 16px;
    }

    li.task.completed .task-name {
      text-decoration: line-through;
      opacity: 0.6;
    }

    .task-info {
      display: flex;
      align-items: center;
      gap: 12px;
      min-width: 0;
    }

    .badge {
      font-size: 0.75rem;
      font-weight: 600;
      padding: 4px 10px;
      border-radius: 999px;
      color: white;
      white-space: nowrap;
    }

    .priority-high { background: #d65745; }
    .priority-medium { background: #d9a23c; }
    .priority-low { background: #4f9d69; }

    .task-name {
      font-weight: 600;
      overflow-wrap: anywhere;
    }

    .task-meta {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .task-actions {
      display: flex;
      gap: 6px;
      flex-shrink: 0;
    }

    .task-actions button {
      padding: 6px 10px;
      background: transparent;
      border: 1px solid rgba(110, 110, 110, 0.3);
      color: var(--ink);
    }

    .empty {
      display: none;
      text-align: center;
      color: var(--muted);
      padding: 24px 0;
    }

    .empty.visible {
      display: block;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] { color: var(--danger); }
    .status[data-type="ok"] { color: var(--ok); }

    .modal {
      position: fixed;
      inset: 0;
      display: none;
      place-items: center;
      background: rgba(0, 0, 0, 0.4);
    }

    .modal.show {
      display: grid;
    }

    .modal-card {
      width: min(420px, 92vw);
      background: var(--card);
      border-radius: 20px;
      padding: 24px;
      display: grid;
      gap: 12px;
      box-shadow: var(--shadow);
    }

    .modal-card h2 {
      margin: 0;
      font-size: 1.2rem;
    }

    .modal-buttons {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
    }

    .toasts {
      position: fixed;
      right: 18px;
      bottom: 18px;
      display: grid;
      gap: 10px;
    }

    .toast {
      background: var(--accent-2);
      color: white;
      border-radius: 14px;
      padding: 12px 16px;
      max-width: 320px;
      box-shadow: var(--shadow);
    }

    @media (max-width: 600px) {
      .add-row, .filter-row {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body class="{{THEME}}">
  <main class="app">
    <header>
      <h1>Smart Study Planner</h1>
      <div class="header-actions">
        <button class="btn-ghost" id="theme-toggle" type="button">Theme</button>
        <button class="btn-ghost" id="notify-toggle" type="button">Enable reminders</button>
      </div>
    </header>

    <section class="add-row">
      <input id="task-name" type="text" placeholder="What do you need to study?" />
      <input id="task-date" type="date" />
      <select id="task-priority">
        <option value="Low">Low</option>
        <option value="Medium" selected>Medium</option>
        <option value="High">High</option>
      </select>
      <button class="btn-primary" id="add-btn" type="button">Add task</button>
    </section>

    <section class="filter-row">
      <input id="search" type="text" placeholder="Search tasks" />
      <select id="filter-status">
        <option value="all">All</option>
        <option value="active">Active</option>
        <option value="completed">Completed</option>
      </select>
      <select id="filter-priority">
        <option value="all">Any priority</option>
        <option value="Low">Low</option>
        <option value="Medium">Medium</option>
        <option value="High">High</option>
      </select>
      <button class="btn-danger" id="clear-completed" type="button">Clear completed</button>
    </section>

    <section class="progress-wrap">
      <div class="progress-meta">
        <span id="progress-text">0% completed</span>
        <span id="streak-text">Streak: 0 days</span>
      </div>
      <div class="progress-bar"><div class="progress-fill" id="progress-fill"></div></div>
    </section>

    <ul class="tasks" id="task-list"></ul>
    <div class="empty" id="empty-state">No tasks match. Add one above or relax the filters.</div>

    <div class="status" id="status"></div>
  </main>

  <div class="modal" id="edit-modal" aria-hidden="true">
    <div class="modal-card">
      <h2>Edit task</h2>
      <input id="edit-name" type="text" />
      <input id="edit-date" type="date" />
      <select id="edit-priority">
        <option value="Low">Low</option>
        <option value="Medium">Medium</option>
        <option value="High">High</option>
      </select>
      <div class="modal-buttons">
        <button class="btn-ghost" id="edit-cancel" type="button">Cancel</button>
        <button class="btn-primary" id="edit-save" type="button">Save</button>
      </div>
    </div>
  </div>

  <div class="toasts" id="toasts"></div>

  <script>
    const taskList = document.getElementById('task-list');
    const emptyState = document.getElementById('empty-state');
    const statusEl = document.getElementById('status');
    const progressFill = document.getElementById('progress-fill');
    const progressText = document.getElementById('progress-text');
    const streakText = document.getElementById('streak-text');
    const searchEl = document.getElementById('search');
    const statusFilterEl = document.getElementById('filter-status');
    const priorityFilterEl = document.getElementById('filter-priority');
    const notifyToggle = document.getElementById('notify-toggle');
    const themeToggle = document.getElementById('theme-toggle');
    const editModal = document.getElementById('edit-modal');
    const toasts = document.getElementById('toasts');

    let editingId = null;
    // keyed by task and day; the server feed is bounded, so indexes shift
    const seenReminders = new Set();

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; statusEl.dataset.type = ''; }, 2500);
      }
    };

    const api = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const escapeHtml = (str) =>
      str.replace(/[&<>"']/g, (s) => ({
        '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;'
      })[s]);

    const updateSummary = (summary) => {
      progressFill.style.width = summary.percent + '%';
      progressText.textContent = summary.percent + '% completed';
      const count = summary.streak.count;
      streakText.textContent = 'Streak: ' + count + ' day' + (count === 1 ? '' : 's');
    };

    const renderTasks = (payload) => {
      taskList.innerHTML = '';
      emptyState.classList.toggle('visible', payload.empty);
      payload.tasks.forEach((task) => {
        const li = document.createElement('li');
        li.className = 'task' + (task.completed ? ' completed' : '');
        li.innerHTML =
          '<div class="task-info">' +
            '<span class="badge priority-' + task.priority.toLowerCase() + '">' + task.priority + '</span>' +
            '<div><div class="task-name">' + escapeHtml(task.name) + '</div>' +
            '<div class="task-meta">due ' + task.date + '</div></div>' +
          '</div>' +
          '<div class="task-actions">' +
            '<button type="button" data-action="toggle" title="Toggle complete">Done</button>' +
            '<button type="button" data-action="edit" title="Edit task">Edit</button>' +
            '<button type="button" data-action="delete" title="Delete task">Delete</button>' +
          '</div>';
        li.querySelector('[data-action="toggle"]').addEventListener('click', () => toggleTask(task.id));
        li.querySelector('[data-action="edit"]').addEventListener('click', () => openEdit(task));
        li.querySelector('[data-action="delete"]').addEventListener('click', () => deleteTask(task.id));
        taskList.appendChild(li);
      });
      updateSummary(payload.summary);
    };

    const listQuery = () => {
      const params = new URLSearchParams();
      const q = searchEl.value.trim();
      if (q) params.set('q', q);
      if (statusFilterEl.value !== 'all') params.set('status', statusFilterEl.value);
      if (priorityFilterEl.value !== 'all') params.set('priority', priorityFilterEl.value);
      const encoded = params.toString();
      return '/api/tasks' + (encoded ? '?' + encoded : '');
    };

    const refresh = async () => {
      renderTasks(await api('GET', listQuery()));
    };

    const addTask = async () => {
      const name = document.getElementById('task-name').value;
      const date = document.getElementById('task-date').value;
      const priority = document.getElementById('task-priority').value;
      try {
        await api('POST', '/api/tasks', { name, date, priority });
        document.getElementById('task-name').value = '';
        document.getElementById('task-date').value = '';
        document.getElementById('task-priority').value = 'Medium';
        setStatus('Task added', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const toggleTask = async (id) => {
      try {
        await api('POST', '/api/tasks/' + id + '/toggle');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const deleteTask = async (id) => {
      try {
        await api('DELETE', '/api/tasks/' + id);
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const openEdit = (task) => {
      editingId = task.id;
      document.getElementById('edit-name').value = task.name;
      document.getElementById('edit-date').value = task.date;
      document.getElementById('edit-priority').value = task.priority;
      editModal.classList.add('show');
      editModal.setAttribute('aria-hidden', 'false');
    };

    const closeEdit = () => {
      editingId = null;
      editModal.classList.remove('show');
      editModal.setAttribute('aria-hidden', 'true');
    };

    document.getElementById('edit-cancel').addEventListener('click', closeEdit);
    document.getElementById('edit-save').addEventListener('click', async () => {
      if (editingId === null) return closeEdit();
      const body = {
        name: document.getElementById('edit-name').value,
        date: document.getElementById('edit-date').value,
        priority: document.getElementById('edit-priority').value
      };
      try {
        await api('PUT', '/api/tasks/' + editingId, body);
        closeEdit();
        setStatus('Task updated', 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    document.getElementById('clear-completed').addEventListener('click', async () => {
      if (!confirm('Remove all completed tasks?')) return;
      try {
        const result = await api('POST', '/api/tasks/clear-completed');
        setStatus('Removed ' + result.removed + ' task' + (result.removed === 1 ? '' : 's'), 'ok');
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    themeToggle.addEventListener('click', async () => {
      try {
        const settings = await api('POST', '/api/settings/theme');
        document.body.classList.toggle('dark', settings.theme === 'dark');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const renderNotifyToggle = (enabled) => {
      notifyToggle.textContent = enabled ? 'Disable reminders' : 'Enable reminders';
    };

    notifyToggle.addEventListener('click', async () => {
      try {
        const outcome = await api('POST', '/api/settings/notifications');
        renderNotifyToggle(outcome.enabled);
        setStatus(outcome.message, outcome.enabled ? 'ok' : '');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    const showToast = (reminder) => {
      const el = document.createElement('div');
      el.className = 'toast';
      el.textContent = reminder.title + ': ' + reminder.body;
      toasts.appendChild(el);
      setTimeout(() => el.remove(), 8000);
    };

    const pollReminders = async () => {
      try {
        const feed = await api('GET', '/api/reminders');
        feed.forEach((reminder) => {
          const key = reminder.task_id + '|' + reminder.date;
          if (seenReminders.has(key)) return;
          seenReminders.add(key);
          showToast(reminder);
        });
      } catch (err) {
        // feed polling is best effort
      }
    };

    document.getElementById('add-btn').addEventListener('click', addTask);
    [searchEl, statusFilterEl, priorityFilterEl].forEach((el) =>
      el.addEventListener('input', () => refresh().catch((err) => setStatus(err.message, 'error')))
    );

    const init = async () => {
      const settings = await api('GET', '/api/settings');
      document.body.classList.toggle('dark', settings.theme === 'dark');
      renderNotifyToggle(settings.notifications_enabled);
      await refresh();
      await pollReminders();
      setInterval(pollReminders, 60 * 1000);
    };

    init().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
