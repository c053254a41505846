//! Example files for the optional packages picked during project bootstrap

use super::files::write_file;
use super::packages::{AXIOS, REACT_QUERY, ZOD, ZUSTAND};
use crate::error::Result;
use crate::request::{ProjectRequest, Script};
use crate::templates::render;
use std::path::{Path, PathBuf};

const USER_STORE_TS: &str = include_str!("../../assets/examples/userStore.ts.tmpl");
const USER_STORE_JS: &str = include_str!("../../assets/examples/userStore.js.tmpl");
const TODO_STORE_TS_HEAD: &str = include_str!("../../assets/examples/todoStore.ts.head.tmpl");
const TODO_STORE_JS_HEAD: &str = include_str!("../../assets/examples/todoStore.js.head.tmpl");
const TODO_STORE_BODY: &str = include_str!("../../assets/examples/todoStore.body.tmpl");
const API: &str = include_str!("../../assets/examples/api.tmpl");
const USER_SERVICE_ZOD_TS: &str = include_str!("../../assets/examples/userService.zod.ts.tmpl");
const USER_SERVICE_ZOD_JS: &str = include_str!("../../assets/examples/userService.zod.js.tmpl");
const USER_SERVICE_TS: &str = include_str!("../../assets/examples/userService.ts.tmpl");
const USER_SERVICE_JS: &str = include_str!("../../assets/examples/userService.js.tmpl");
const USE_USERS_TS: &str = include_str!("../../assets/examples/useUsers.ts.tmpl");
const USE_USERS_JS: &str = include_str!("../../assets/examples/useUsers.js.tmpl");
const PAGE_ZUSTAND: &str = include_str!("../../assets/examples/ExampleUsage.zustand.tmpl");
const PAGE_QUERY: &str = include_str!("../../assets/examples/ExampleUsage.query.tmpl");
const DOC_ZUSTAND: &str = include_str!("../../assets/examples/EXAMPLES.zustand.md");
const DOC_AXIOS: &str = include_str!("../../assets/examples/EXAMPLES.axios.md");
const DOC_QUERY: &str = include_str!("../../assets/examples/EXAMPLES.query.md");
const DOC_ZOD: &str = include_str!("../../assets/examples/EXAMPLES.zod.md");
const DOC_TAIL: &str = include_str!("../../assets/examples/EXAMPLES.tail.md");

/// Which example families apply to a project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExampleSet {
    pub zustand: bool,
    pub react_query: bool,
    pub axios: bool,
    pub zod: bool,
}

impl ExampleSet {
    pub fn for_project(request: &ProjectRequest) -> Self {
        Self {
            zustand: request.has_package(ZUSTAND),
            react_query: request.has_package(REACT_QUERY),
            axios: request.has_package(AXIOS),
            zod: request.has_package(ZOD),
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.zustand || self.react_query || self.axios || self.zod)
    }

    /// Hooks need the axios-backed user service
    pub fn has_query_hooks(&self) -> bool {
        self.react_query && self.axios
    }

    pub fn has_usage_page(&self) -> bool {
        self.zustand || self.react_query
    }
}

/// A file relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFile {
    pub path: PathBuf,
    pub contents: String,
}

impl ExampleFile {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

pub fn user_store(script: Script) -> String {
    let template = if script.is_typescript() {
        USER_STORE_TS
    } else {
        USER_STORE_JS
    };
    template.to_string()
}

pub fn todo_store(script: Script) -> String {
    let head = if script.is_typescript() {
        TODO_STORE_TS_HEAD
    } else {
        TODO_STORE_JS_HEAD
    };
    format!("{}{}", head, TODO_STORE_BODY)
}

/// Escape `value` for use inside a single-quoted JS string literal
fn js_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Axios instance; `api_url` is the fallback when `VITE_API_URL` is unset
pub fn api(script: Script, zod: bool, api_url: &str) -> String {
    let typed = script.is_typescript();
    let import = if typed && zod {
        "axios, { AxiosError, type AxiosRequestConfig }"
    } else if typed {
        "axios, { AxiosError }"
    } else {
        "axios"
    };
    let error_type = if typed { ": AxiosError" } else { "" };
    let api_url = js_single_quoted(api_url);

    let mut out = render(
        API,
        &[
            ("__AXIOS_IMPORT__", import),
            ("__ERROR_TYPE__", error_type),
            ("__API_URL__", api_url.as_str()),
        ],
    );

    if typed && zod {
        out.push_str(
            "\nexport const apiRequest = async <T>(config: AxiosRequestConfig): Promise<T> => {\n  const response = await api.request<T>(config);\n  return response.data;\n};\n",
        );
    }
    out
}

pub fn user_service(script: Script, zod: bool) -> String {
    let template = match (script.is_typescript(), zod) {
        (true, true) => USER_SERVICE_ZOD_TS,
        (false, true) => USER_SERVICE_ZOD_JS,
        (true, false) => USER_SERVICE_TS,
        (false, false) => USER_SERVICE_JS,
    };
    template.to_string()
}

pub fn use_users(script: Script, zod: bool) -> String {
    if !script.is_typescript() {
        return USE_USERS_JS.to_string();
    }
    let (imports, update_type) = if zod {
        ("type CreateUserDto, type UpdateUserDto, type User", "UpdateUserDto")
    } else {
        ("type CreateUserDto, type User", "Partial<User>")
    };
    render(
        USE_USERS_TS,
        &[("__TYPE_IMPORTS__", imports), ("__UPDATE_TYPE__", update_type)],
    )
}

const QUERY_CLIENT: &str = "import { QueryClient } from '@tanstack/react-query';

export const queryClient = new QueryClient({
  defaultOptions: {
    queries: {
      retry: 1,
      refetchOnWindowFocus: false,
      staleTime: 5 * 60 * 1000, // 5 minutes
    },
    mutations: {
      retry: 0,
    },
  },
});
";

pub fn query_client() -> String {
    QUERY_CLIENT.to_string()
}

/// `src/pages/ExampleUsage` demonstrating the selected stores and hooks
pub fn usage_page(set: ExampleSet, script: Script) -> String {
    let ext = script.module_ext();
    let mut imports = Vec::new();
    let mut hooks = Vec::new();
    let mut sections = Vec::new();
    let mut features = Vec::new();
    let mut files = Vec::new();
    let mut topics = Vec::new();

    if set.zustand {
        imports.push("import { useUserStore } from '@/stores/userStore';");
        imports.push("import { useTodoStore, useFilteredTodos } from '@/stores/todoStore';");
        hooks.push("  const { user, theme, setUser, toggleTheme } = useUserStore();");
        hooks.push("  const { addTodo, toggleTodo, filter, setFilter } = useTodoStore();");
        hooks.push("  const filteredTodos = useFilteredTodos();");
        sections.push(PAGE_ZUSTAND.to_string());
        topics.push(" * - Zustand stores (client state)");
        features.push("<li><strong>Zustand:</strong> persisted store and DevTools</li>".to_string());
        files.push(format!("<li>• <code>src/stores/userStore.{}</code> - persisted user store</li>", ext));
        files.push(format!("<li>• <code>src/stores/todoStore.{}</code> - todo store with DevTools</li>", ext));
    }

    if set.has_query_hooks() {
        imports.push("import { useUsers, useCreateUser } from '@/hooks/useUsers';");
        hooks.push("  const { data: users, isLoading: usersLoading, error: usersError } = useUsers();");
        hooks.push("  const createUser = useCreateUser();");
        let title = if set.zod {
            "React Query + Axios + Zod"
        } else {
            "React Query + Axios"
        };
        sections.push(render(PAGE_QUERY, &[("__QUERY_TITLE__", title)]));
    }

    if set.react_query {
        topics.push(" * - React Query (server cache)");
        features.push("<li><strong>React Query:</strong> caching and synchronization</li>".to_string());
        files.push(format!("<li>• <code>src/lib/queryClient.{}</code> - QueryClient setup</li>", ext));
        if set.axios {
            files.push(format!("<li>• <code>src/hooks/useUsers.{}</code> - React Query hooks</li>", ext));
        }
    }
    if set.axios {
        topics.push(" * - Axios (HTTP requests)");
        features.push("<li><strong>Axios:</strong> interceptors and error handling</li>".to_string());
        files.push(format!("<li>• <code>src/services/api.{}</code> - Axios instance</li>", ext));
        files.push(format!("<li>• <code>src/services/userService.{}</code> - user service</li>", ext));
    }
    if set.zod {
        topics.push(" * - Zod (runtime validation)");
        features.push("<li><strong>Zod:</strong> runtime type validation</li>".to_string());
    }

    let indent = |items: &[String]| {
        items
            .iter()
            .map(|i| format!("            {}", i))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"{imports}

/**
 * Example page showing:
{topics}
 */
export function ExampleUsage() {{
{hooks}

  return (
    <div className="min-h-screen bg-gray-100 p-8">
      <div className="max-w-4xl mx-auto">
        <h1 className="text-4xl font-bold mb-8 text-center">
          📚 Usage Examples
        </h1>

        <div className="bg-blue-50 border-l-4 border-blue-500 p-4 mb-8">
          <h2 className="text-xl font-semibold mb-2">🎉 What's wired up:</h2>
          <ul className="list-disc list-inside space-y-1">
{features}
          </ul>
        </div>

{sections}
        <section className="p-6 border rounded-lg bg-gradient-to-r from-purple-50 to-pink-50 shadow">
          <h2 className="text-xl font-semibold mb-2">📖 Generated files</h2>
          <ul className="text-sm space-y-1 text-gray-700">
{files}
          </ul>
        </section>
      </div>
    </div>
  );
}}
"#,
        imports = imports.join("\n"),
        topics = topics.join("\n"),
        hooks = hooks.join("\n"),
        features = indent(&features),
        sections = sections.join("\n"),
        files = indent(&files),
    )
}

/// `EXAMPLES.md` documenting the generated examples
pub fn examples_doc(set: ExampleSet, script: Script) -> String {
    let ext = script.module_ext();
    let fill = |doc: &str| render(doc, &[("__EXT__", ext)]);

    let mut out = String::from(
        "# 📚 Usage Examples\n\nThis project ships with working examples for the selected packages.\n\n## 🎯 Included packages\n\n",
    );
    let mut links = Vec::new();

    if set.zustand {
        out.push_str(&fill(DOC_ZUSTAND));
        out.push('\n');
        links.push("- [Zustand](https://github.com/pmndrs/zustand)");
    }
    if set.axios {
        let zod_line = if set.zod { "- ✅ Zod validation\n" } else { "" };
        out.push_str(&render(&fill(DOC_AXIOS), &[("__ZOD_LINE__\n", zod_line)]));
        out.push('\n');
        links.push("- [Axios](https://axios-http.com/)");
    }
    if set.react_query {
        out.push_str(&fill(DOC_QUERY));
        out.push('\n');
        links.push("- [React Query](https://tanstack.com/query/latest)");
    }
    if set.zod {
        out.push_str(DOC_ZOD);
        out.push('\n');
        links.push("- [Zod](https://zod.dev/)");
    }

    if set.has_usage_page() {
        out.push_str(&render(DOC_TAIL, &[("__JSX_EXT__", script.jsx_ext())]));
        out.push('\n');
    }

    out.push_str("## 📖 Documentation\n\n");
    out.push_str(&links.join("\n"));
    out.push('\n');
    out
}

/// Every example file for `set`, relative to the project root
pub fn example_files(set: ExampleSet, script: Script, api_url: &str) -> Vec<ExampleFile> {
    if set.is_empty() {
        return Vec::new();
    }

    let ext = script.module_ext();
    let mut files = Vec::new();

    if set.zustand {
        files.push(ExampleFile::new(format!("src/stores/userStore.{}", ext), user_store(script)));
        files.push(ExampleFile::new(format!("src/stores/todoStore.{}", ext), todo_store(script)));
    }
    if set.axios {
        files.push(ExampleFile::new(format!("src/services/api.{}", ext), api(script, set.zod, api_url)));
        files.push(ExampleFile::new(
            format!("src/services/userService.{}", ext),
            user_service(script, set.zod),
        ));
    }
    if set.has_query_hooks() {
        files.push(ExampleFile::new(format!("src/hooks/useUsers.{}", ext), use_users(script, set.zod)));
    }
    if set.react_query {
        files.push(ExampleFile::new(format!("src/lib/queryClient.{}", ext), query_client()));
    }
    if set.has_usage_page() {
        files.push(ExampleFile::new(
            format!("src/pages/ExampleUsage.{}", script.jsx_ext()),
            usage_page(set, script),
        ));
    }
    files.push(ExampleFile::new("EXAMPLES.md", examples_doc(set, script)));

    files
}

/// Write the examples under `dir`; returns the relative paths written
pub fn write_examples(dir: &Path, set: ExampleSet, script: Script, api_url: &str) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for file in example_files(set, script, api_url) {
        write_file(&dir.join(&file.path), &file.contents)?;
        written.push(file.path);
    }
    Ok(written)
}
