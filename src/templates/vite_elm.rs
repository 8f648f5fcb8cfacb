// Vite + Elm + Tailwind CSS project templates

use super::{html_escape, json_string};

/// `package.json` with dev/build/test scripts and the Vite + Elm toolchain
pub fn package_json(project_name: &str) -> String {
    format!(
        r#"{{
  "name": {},
  "version": "1.0.0",
  "type": "module",
  "scripts": {{
    "dev": "vite",
    "build": "vite build",
    "test": "elm-test",
    "postinstall": "elm-tooling install"
  }},
  "devDependencies": {{
    "@tailwindcss/vite": "^4.1.16",
    "elm-tooling": "^1.16.0",
    "tailwindcss": "^4.1.16",
    "vite": "^7.1.12",
    "vite-plugin-elm-watch": "^1.4.3"
  }}
}}
"#,
        json_string(project_name)
    )
}

pub fn vite_config_js() -> String {
    r#"import { defineConfig } from 'vite'
import tailwindcss from '@tailwindcss/vite'
import elmWatch from 'vite-plugin-elm-watch'

export default defineConfig({
  plugins: [
    tailwindcss(),
    elmWatch()
  ]
})
"#
    .to_string()
}

/// `index.html` titled with the project name
pub fn index_html(project_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{}</title>
</head>
<body>
  <div id="app"></div>
  <script type="module" src="/src/main.js"></script>
</body>
</html>
"#,
        html_escape(project_name)
    )
}

pub fn main_js() -> String {
    r#"import './style.css'
import { Elm } from './Main.elm'

Elm.Main.init({
  node: document.getElementById('app')
})
"#
    .to_string()
}

pub fn style_css() -> String {
    r#"@import "tailwindcss";

body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
    'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
    sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}
"#
    .to_string()
}

/// `src/Main.elm`: Browser.sandbox counter styled with Tailwind classes
pub fn main_elm() -> String {
    r#"module Main exposing (main)

import Browser
import Html exposing (Html, button, div, h1, text)
import Html.Attributes exposing (class)
import Html.Events exposing (onClick)


-- MAIN


main : Program () Model Msg
main =
    Browser.sandbox
        { init = init
        , view = view
        , update = update
        }


-- MODEL


type alias Model =
    { count : Int
    }


init : Model
init =
    { count = 0
    }


-- UPDATE


type Msg
    = Increment
    | Decrement


update : Msg -> Model -> Model
update msg model =
    case msg of
        Increment ->
            { model | count = model.count + 1 }

        Decrement ->
            { model | count = model.count - 1 }


-- VIEW


view : Model -> Html Msg
view model =
    div [ class "min-h-screen bg-gray-100 flex items-center justify-center" ]
        [ div [ class "bg-white p-8 rounded-lg shadow-lg" ]
            [ h1 [ class "text-3xl font-bold text-center mb-6 text-gray-800" ]
                [ text "Elm + Vite + Tailwind" ]
            , div [ class "flex items-center justify-center gap-4" ]
                [ button
                    [ onClick Decrement
                    , class "px-4 py-2 bg-red-500 text-white rounded hover:bg-red-600"
                    ]
                    [ text "-" ]
                , div [ class "text-2xl font-mono w-16 text-center" ]
                    [ text (String.fromInt model.count) ]
                , button
                    [ onClick Increment
                    , class "px-4 py-2 bg-green-500 text-white rounded hover:bg-green-600"
                    ]
                    [ text "+" ]
                ]
            ]
        ]
"#
    .to_string()
}

pub fn elm_json() -> String {
    r#"{
    "type": "application",
    "source-directories": [
        "src"
    ],
    "elm-version": "0.19.1",
    "dependencies": {
        "direct": {
            "elm/browser": "1.0.2",
            "elm/core": "1.0.5",
            "elm/html": "1.0.0"
        },
        "indirect": {
            "elm/json": "1.1.3",
            "elm/time": "1.0.0",
            "elm/url": "1.0.0",
            "elm/virtual-dom": "1.0.3"
        }
    },
    "test-dependencies": {
        "direct": {},
        "indirect": {}
    }
}
"#
    .to_string()
}

/// `elm-tooling.json` pinning the Elm compiler, formatter and elm-json
pub fn elm_tooling_json() -> String {
    r#"{
  "tools": {
    "elm": "0.19.1",
    "elm-format": "0.8.7",
    "elm-json": "0.2.13"
  }
}
"#
    .to_string()
}

pub fn gitignore() -> String {
    r#"# Dependencies
node_modules/
elm-stuff/

# Build output
dist/

# Elm
.elm-spa/

# IDE
.idea/
.vscode/
*.swp
*.swo
*~

# OS
.DS_Store
Thumbs.db

# Logs
npm-debug.log*
yarn-debug.log*
yarn-error.log*
"#
    .to_string()
}

pub fn readme(project_name: &str) -> String {
    format!(
        r#"# {}

Vite + Elm + Tailwind CSS project

## Setup

```bash
npm install
```

## Development

```bash
npm run dev
```

Open http://localhost:5173

## Build

```bash
npm run build
```

## Testing

```bash
npm test
```

## Stack

- [Vite](https://vitejs.dev/) - Build tool
- [Elm](https://elm-lang.org/) - Functional programming language
- [Tailwind CSS](https://tailwindcss.com/) - Utility-first CSS framework
- [vite-plugin-elm-watch](https://github.com/ChristophP/vite-plugin-elm-watch) - Hot reload for Elm
- [elm-tooling](https://elm-tooling.github.io/elm-tooling-cli/) - Elm tools installer

## License

MIT
"#,
        project_name
    )
}
