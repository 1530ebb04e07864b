// src/pages.rs

/// Landing page served at `/`.
pub const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <title>🤖 Sofi AI - Render</title>
    <style>
        body {
            background: #0f172a;
            color: white;
            font-family: sans-serif;
            padding: 40px;
            text-align: center;
        }
        h1 {
            color: #60a5fa;
            font-size: 2.5em;
            margin: 20px 0;
        }
        .box {
            background: #1e293b;
            padding: 30px;
            border-radius: 15px;
            max-width: 600px;
            margin: 20px auto;
            border: 2px solid #3b82f6;
        }
        .btn {
            display: block;
            background: #3b82f6;
            color: white;
            padding: 15px;
            margin: 15px;
            border-radius: 10px;
            text-decoration: none;
            font-weight: bold;
        }
        .btn:hover {
            background: #2563eb;
        }
        footer {
            margin-top: 40px;
            color: #94a3b8;
        }
    </style>
</head>
<body>
    <h1>🎉 ¡SOFI AI FUNCIONANDO!</h1>
    <div class="box">
        <p>✅ Backend Rust activo en Render</p>
        <p><strong>Usuario:</strong> Edward</p>
        <p><strong>Hosting:</strong> Render.com</p>

        <a href="/health" class="btn">📊 Ver estado del servidor</a>
        <a href="/api/test" class="btn">⚡ Página de prueba</a>
        <a href="/api/models" class="btn">🧠 Modelos disponibles</a>
    </div>

    <footer>Hecho con Rust • Render.com • GitHub</footer>
</body>
</html>
"#;
