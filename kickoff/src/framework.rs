use std::fmt;

/// The tool that launches a framework's project generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    Npm,
    Npx,
    Composer,
}

impl Launcher {
    /// Executable that must be on the search path, and how to name it to the user.
    pub fn requirement(self) -> (&'static str, &'static str) {
        match self {
            Launcher::Npm => ("npm", "Node.js/npm"),
            Launcher::Npx => ("npx", "npx"),
            Launcher::Composer => ("php", "PHP"),
        }
    }

    pub fn hints(self) -> &'static [&'static str] {
        match self {
            Launcher::Npm | Launcher::Npx => &[
                "Install Node.js (which ships npm and npx) from https://nodejs.org",
                "Open a new terminal so the updated PATH is picked up",
            ],
            Launcher::Composer => &[
                "Install PHP from https://www.php.net/downloads",
                "Check that `php --version` works in this terminal",
            ],
        }
    }
}

/// Every project generator the menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Laravel,
    NextJs,
    Vue,
    Svelte,
    NestJs,
    Angular,
    Express,
}

impl Framework {
    /// Menu order.
    pub const ALL: [Framework; 8] = [
        Framework::React,
        Framework::Laravel,
        Framework::NextJs,
        Framework::Vue,
        Framework::Svelte,
        Framework::NestJs,
        Framework::Angular,
        Framework::Express,
    ];

    pub fn menu_key(self) -> char {
        match self {
            Framework::React => '1',
            Framework::Laravel => '2',
            Framework::NextJs => '3',
            Framework::Vue => '4',
            Framework::Svelte => '5',
            Framework::NestJs => '6',
            Framework::Angular => '7',
            Framework::Express => '8',
        }
    }

    /// Name shown in the menu entry.
    pub fn menu_name(self) -> &'static str {
        match self {
            Framework::React => "React.js (Vite)",
            Framework::Laravel => "Laravel",
            Framework::NextJs => "Next.js",
            Framework::Vue => "Vue.js (Vite)",
            Framework::Svelte => "Svelte (Vite)",
            Framework::NestJs => "NestJS",
            Framework::Angular => "Angular",
            Framework::Express => "Express.js",
        }
    }

    /// Name shown in the section header of the install screen.
    pub fn heading(self) -> &'static str {
        match self {
            Framework::React => "React (via Vite)",
            Framework::Vue => "Vue (via Vite)",
            Framework::Svelte => "Svelte (via Vite)",
            Framework::Express => "Express.js",
            other => other.display_name(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Laravel => "Laravel",
            Framework::NextJs => "Next.js",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
            Framework::NestJs => "NestJS",
            Framework::Angular => "Angular",
            Framework::Express => "Express",
        }
    }

    /// Subdirectory of the projects root that holds this framework's projects.
    pub fn category(self) -> &'static str {
        match self {
            Framework::React => "reactjs",
            Framework::Laravel => "laravel",
            Framework::NextJs => "nextjs",
            Framework::Vue => "vuejs",
            Framework::Svelte => "svelte",
            Framework::NestJs => "nestjs",
            Framework::Angular => "angular",
            Framework::Express => "express",
        }
    }

    pub fn launcher(self) -> Launcher {
        match self {
            Framework::React | Framework::Vue | Framework::Svelte => Launcher::Npm,
            Framework::Laravel => Launcher::Composer,
            Framework::NextJs | Framework::NestJs | Framework::Angular | Framework::Express => {
                Launcher::Npx
            }
        }
    }

    /// Generator arguments that follow the launcher command.
    ///
    /// For Laravel the launcher is whatever Composer command was resolved
    /// (`composer` or `php <bin>/composer.phar`).
    pub fn generator_args(self, project_name: &str) -> Vec<String> {
        let args: Vec<&str> = match self {
            Framework::React => vec!["create", "vite@latest", project_name, "--", "--template", "react"],
            Framework::Vue => vec!["create", "vite@latest", project_name, "--", "--template", "vue"],
            Framework::Svelte => {
                vec!["create", "vite@latest", project_name, "--", "--template", "svelte"]
            }
            Framework::Laravel => vec![
                "create-project",
                "laravel/laravel",
                project_name,
                "--ignore-platform-req=ext-fileinfo",
            ],
            Framework::NextJs => vec![
                "create-next-app@latest",
                project_name,
                "--use-npm",
                "--yes",
                "--typescript",
                "--tailwind",
                "--eslint",
                "--app",
                "--src-dir",
                "--import-alias",
                "@/*",
            ],
            Framework::NestJs => vec![
                "-y",
                "@nestjs/cli@latest",
                "new",
                project_name,
                "--package-manager",
                "npm",
            ],
            Framework::Angular => vec![
                "-y",
                "-p",
                "@angular/cli@latest",
                "ng",
                "new",
                project_name,
                "--skip-git",
                "--defaults",
            ],
            Framework::Express => vec!["-y", "express-generator@latest", project_name, "--no-view"],
        };
        args.into_iter().map(String::from).collect()
    }

    /// Commands to run inside the new project to start it.
    pub fn next_steps(self) -> &'static [&'static str] {
        match self {
            Framework::React | Framework::Vue | Framework::Svelte => &["npm install", "npm run dev"],
            Framework::Laravel => &["php artisan serve"],
            Framework::NextJs => &["npm run dev"],
            Framework::NestJs => &["npm run start:dev"],
            Framework::Angular => &["npm start"],
            Framework::Express => &["npm install", "npm start"],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
